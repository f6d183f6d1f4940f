//  ____   ____                     ____
// |  _ \ |  _ \   __ _  ___  ___  / ___|  ___  _ __
// | |_) || |_) | / _` |/ __|/ __|| |  _  / _ \| '_ \
// |  _ < |  __/ | (_| |\__ \\__ \| |_| ||  __/| | | |
// |_| \_\|_|     \__,_||___/|___/ \____| \___||_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-04
// Version : 0.1.0
// License : Mulan PSL v2
//
// Library entry

pub mod charset;
pub mod configtool;
pub mod error;
pub mod passgen;
pub mod strength;
pub mod templates;

pub use charset::CharacterClass;
pub use error::{ConfigError, PassgenError, TemplateError};
pub use passgen::{generate_password, generate_password_with_rng, PasswordConfig};
pub use strength::{estimate_strength, StrengthLabel, StrengthResult};
pub use templates::{find_template, PresetTemplate, TEMPLATES};
