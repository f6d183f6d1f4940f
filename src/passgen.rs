//  ____   ____                     ____
// |  _ \ |  _ \   __ _  ___  ___  / ___|  ___  _ __
// | |_) || |_) | / _` |/ __|/ __|| |  _  / _ \| '_ \
// |  _ < |  __/ | (_| |\__ \\__ \| |_| ||  __/| | | |
// |_| \_\|_|     \__,_||___/|___/ \____| \___||_| |_|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-02
// Version : 0.1.0
// License : Mulan PSL v2
//
// Password generator

use log::debug;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use crate::charset::CharacterClass;
use crate::error::PassgenError;

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 128;

/// 密码生成选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    pub length: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 32,
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }
}

impl PasswordConfig {
    pub const fn new(length: usize, uppercase: bool, lowercase: bool, digits: bool, symbols: bool) -> Self {
        Self { length, uppercase, lowercase, digits, symbols }
    }

    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    /// Enabled classes in alphabet order.
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL.into_iter().filter(|c| self.is_enabled(*c)).collect()
    }

    pub fn validate(&self) -> Result<(), PassgenError> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(PassgenError::invalid_length(self.length));
        }
        if !(self.uppercase || self.lowercase || self.digits || self.symbols) {
            return Err(PassgenError::NoCharacterClass);
        }
        Ok(())
    }
}

/// 按固定顺序拼接已启用类别的字符
pub fn build_alphabet(config: &PasswordConfig) -> Vec<char> {
    let alphabet: Vec<char> = config
        .enabled_classes()
        .iter()
        .flat_map(|class| class.chars().chars())
        .collect();
    debug!("Built alphabet of {} characters from {:?}", alphabet.len(), config.enabled_classes());
    alphabet
}

/// Generates a password from the operating system's CSPRNG.
pub fn generate_password(config: &PasswordConfig) -> Result<String, PassgenError> {
    generate_password_with_rng(config, &mut OsRng)
}

/// Generates a password drawing from `rng`.
///
/// Each character is `alphabet[r % alphabet.len()]` for an independent `u32`
/// draw `r`. Alphabet sizes that do not divide 2^32 carry a modulo bias of at
/// most `alphabet.len() / 2^32` per character, which is accepted here.
///
/// Validation happens before any randomness is consumed.
pub fn generate_password_with_rng<R>(config: &PasswordConfig, rng: &mut R) -> Result<String, PassgenError>
where
    R: RngCore + CryptoRng + ?Sized,
{
    config.validate()?;

    let alphabet = build_alphabet(config);
    let size = alphabet.len() as u32;

    let password = (0..config.length)
        .map(|_| alphabet[(rng.next_u32() % size) as usize])
        .collect();
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_order() {
        let config = PasswordConfig::new(8, true, false, true, false);
        let alphabet: String = build_alphabet(&config).into_iter().collect();
        assert_eq!(alphabet, "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
    }

    #[test]
    fn test_full_alphabet_size() {
        let alphabet = build_alphabet(&PasswordConfig::default());
        assert_eq!(alphabet.len(), 26 + 26 + 10 + 26);
    }

    #[test]
    fn test_enabled_classes() {
        let config = PasswordConfig::new(8, false, true, false, true);
        assert_eq!(
            config.enabled_classes(),
            vec![CharacterClass::Lowercase, CharacterClass::Symbols]
        );
    }
}
