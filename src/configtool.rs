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
// Config Tools

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use dirs::config_dir;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::passgen::PasswordConfig;

pub const CONFIG_DIR_ENV: &str = "RPASSGEN_CONFIG_DIR";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const MAX_BATCH: usize = 100;

/// 用户默认设置，缺省字段取内置默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    pub batch_count: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self::from_config(&PasswordConfig::default(), 1)
    }
}

impl Defaults {
    pub fn from_config(config: &PasswordConfig, batch_count: usize) -> Self {
        Self {
            length: config.length,
            uppercase: config.uppercase,
            lowercase: config.lowercase,
            digits: config.digits,
            symbols: config.symbols,
            batch_count,
        }
    }

    pub fn config(&self) -> PasswordConfig {
        PasswordConfig::new(self.length, self.uppercase, self.lowercase, self.digits, self.symbols)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.config().validate()?;
        validate_batch_count(self.batch_count)
    }
}

pub fn validate_batch_count(count: usize) -> Result<(), ConfigError> {
    if count == 0 || count > MAX_BATCH {
        return Err(ConfigError::BatchCount { count, max: MAX_BATCH });
    }
    Ok(())
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    match config_dir() {
        Some(path) => Ok(path.join("rpassgen")),
        None => Err(ConfigError::ConfigDir("Could not determine configuration directory".to_string())),
    }
}

pub fn config_file_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE_NAME)
}

/// 加载配置文件，不存在时返回内置默认值
pub fn load_defaults_from(dir: &Path) -> Result<Defaults, ConfigError> {
    let path = config_file_path(dir);
    if !path.exists() {
        debug!("No config file at {}, using built-in defaults", path.display());
        return Ok(Defaults::default());
    }
    let data = fs::read_to_string(&path)?;
    let defaults: Defaults = serde_json::from_str(&data)?;
    defaults.validate()?;
    Ok(defaults)
}

/// Validates and writes `defaults`; an invalid value leaves the file untouched.
pub fn save_defaults_to(dir: &Path, defaults: &Defaults) -> Result<(), ConfigError> {
    defaults.validate()?;
    fs::create_dir_all(dir)?;
    let path = config_file_path(dir);
    let file = fs::File::create(&path)?;
    serde_json::to_writer_pretty(file, defaults)?;
    info!("Saved defaults to {}", path.display());
    Ok(())
}

pub fn reset_defaults_in(dir: &Path) -> Result<(), ConfigError> {
    let path = config_file_path(dir);
    if path.exists() {
        fs::remove_file(&path)?;
        info!("Removed {}", path.display());
    }
    Ok(())
}

pub fn load_defaults() -> Result<Defaults, ConfigError> {
    load_defaults_from(&get_config_dir()?)
}
