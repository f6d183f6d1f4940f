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
// Preset templates

use log::debug;
use serde::Serialize;

use crate::error::TemplateError;
use crate::passgen::PasswordConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresetTemplate {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub config: PasswordConfig,
}

/// 预设模板，按展示顺序排列
pub static TEMPLATES: [PresetTemplate; 4] = [
    PresetTemplate {
        key: "standard",
        name: "Standard",
        description: "Strong password with upper and lower case letters, digits and symbols",
        config: PasswordConfig::new(16, true, true, true, true),
    },
    PresetTemplate {
        key: "pin",
        name: "PIN",
        description: "Digits only",
        config: PasswordConfig::new(8, false, false, true, false),
    },
    PresetTemplate {
        key: "memorable",
        name: "Memorable",
        description: "Letters and digits only",
        config: PasswordConfig::new(12, true, true, true, false),
    },
    PresetTemplate {
        key: "strong",
        name: "Strong",
        description: "Extra strong password of length 24",
        config: PasswordConfig::new(24, true, true, true, true),
    },
];

pub fn template_keys() -> Vec<&'static str> {
    TEMPLATES.iter().map(|t| t.key).collect()
}

/// Looks up a template by key, ignoring case and surrounding whitespace.
pub fn find_template(key: &str) -> Result<&'static PresetTemplate, TemplateError> {
    let wanted = key.trim().to_lowercase();
    debug!("Looking up template '{}'", wanted);
    TEMPLATES
        .iter()
        .find(|t| t.key == wanted)
        .ok_or_else(|| TemplateError::Unknown(key.to_string(), template_keys().join(", ")))
}
