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
// Error types

use std::io;
use thiserror::Error;

use crate::passgen::{MAX_LENGTH, MIN_LENGTH};

/// 密码配置校验失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassgenError {
    #[error("Password length must be between {min} and {max}, got {length}")]
    InvalidLength { length: usize, min: usize, max: usize },

    #[error("At least one character class must be selected")]
    NoCharacterClass,
}

impl PassgenError {
    pub fn invalid_length(length: usize) -> Self {
        PassgenError::InvalidLength { length, min: MIN_LENGTH, max: MAX_LENGTH }
    }

    /// Stable machine-readable code for callers that branch on the cause.
    pub fn code(&self) -> &'static str {
        match self {
            PassgenError::InvalidLength { .. } => "invalid_length",
            PassgenError::NoCharacterClass => "no_character_class",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Unknown template '{0}', expected one of: {1}")]
    Unknown(String, String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config directory error: {0}")]
    ConfigDir(String),

    #[error("Invalid defaults: {0}")]
    Invalid(#[from] PassgenError),

    #[error("Batch count must be between 1 and {max}, got {count}")]
    BatchCount { count: usize, max: usize },
}
