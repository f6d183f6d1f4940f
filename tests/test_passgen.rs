// 密码生成测试

use rpassgen::charset::{CharacterClass, DIGITS, SYMBOLS};
use rpassgen::passgen::*;
use rpassgen::PassgenError;

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;
    use std::collections::HashSet;

    fn all_configs(length: usize) -> Vec<PasswordConfig> {
        (1u8..16)
            .map(|mask| PasswordConfig::new(length, mask & 1 != 0, mask & 2 != 0, mask & 4 != 0, mask & 8 != 0))
            .collect()
    }

    #[test]
    fn test_generate_password_length() {
        for length in [8, 9, 16, 64, 127, 128] {
            let config = PasswordConfig { length, ..Default::default() };
            let password = generate_password(&config).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }

    #[test]
    fn test_only_enabled_classes_appear() {
        let mut rng = ChaCha20Rng::seed_from_u64(7);
        for config in all_configs(64) {
            let password = generate_password_with_rng(&config, &mut rng).unwrap();
            for c in password.chars() {
                let class = CharacterClass::of(c).expect("character outside every class");
                assert!(config.is_enabled(class), "{:?} from disabled class {} in {:?}", c, class, config);
            }
        }
    }

    #[test]
    fn test_no_symbols_when_disabled() {
        let config = PasswordConfig { symbols: false, ..Default::default() };
        for _ in 0..200 {
            let password = generate_password(&config).unwrap();
            assert!(!password.chars().any(|c| SYMBOLS.contains(c)));
        }
    }

    #[test]
    fn test_single_class_digits() {
        let config = PasswordConfig::new(40, false, false, true, false);
        let password = generate_password(&config).unwrap();
        assert!(password.chars().all(|c| DIGITS.contains(c)));
    }

    #[test]
    fn test_length_bounds() {
        let config = |length| PasswordConfig { length, ..Default::default() };

        assert_eq!(
            generate_password(&config(7)),
            Err(PassgenError::InvalidLength { length: 7, min: 8, max: 128 })
        );
        assert_eq!(
            generate_password(&config(129)),
            Err(PassgenError::InvalidLength { length: 129, min: 8, max: 128 })
        );
        assert!(generate_password(&config(0)).is_err());
        assert!(generate_password(&config(8)).is_ok());
        assert!(generate_password(&config(128)).is_ok());
    }

    #[test]
    fn test_length_error_message_names_range() {
        let err = generate_password(&PasswordConfig { length: 7, ..Default::default() }).unwrap_err();
        let message = err.to_string();
        assert!(message.contains('8') && message.contains("128"), "{}", message);
        assert_eq!(err.code(), "invalid_length");
    }

    #[test]
    fn test_no_character_class() {
        for length in [MIN_LENGTH, 32, MAX_LENGTH] {
            let config = PasswordConfig::new(length, false, false, false, false);
            let err = generate_password(&config).unwrap_err();
            assert_eq!(err, PassgenError::NoCharacterClass);
            assert_eq!(err.code(), "no_character_class");
            assert!(err.to_string().contains("At least one"));
        }
    }

    #[test]
    fn test_invalid_config_consumes_no_randomness() {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let mut untouched = ChaCha20Rng::seed_from_u64(42);

        let bad = PasswordConfig::new(8, false, false, false, false);
        assert!(generate_password_with_rng(&bad, &mut rng).is_err());
        let bad = PasswordConfig { length: 200, ..Default::default() };
        assert!(generate_password_with_rng(&bad, &mut rng).is_err());

        let good = PasswordConfig::default();
        assert_eq!(
            generate_password_with_rng(&good, &mut rng).unwrap(),
            generate_password_with_rng(&good, &mut untouched).unwrap()
        );
    }

    #[test]
    fn test_index_selection_is_modulo() {
        // 相同种子下手动复现 r % size 的选择
        use rand::RngCore;
        let config = PasswordConfig::new(24, true, false, true, false);
        let alphabet = build_alphabet(&config);
        let mut rng = ChaCha20Rng::seed_from_u64(1234);
        let mut replay = ChaCha20Rng::seed_from_u64(1234);

        let password = generate_password_with_rng(&config, &mut rng).unwrap();
        let expected: String = (0..24)
            .map(|_| alphabet[(replay.next_u32() % alphabet.len() as u32) as usize])
            .collect();
        assert_eq!(password, expected);
    }

    #[test]
    fn test_repeated_calls_differ() {
        let config = PasswordConfig { length: 16, ..Default::default() };
        let passwords: HashSet<String> = (0..1000)
            .map(|_| generate_password(&config).unwrap())
            .collect();
        assert_eq!(passwords.len(), 1000);
    }

    #[test]
    fn test_every_class_reachable() {
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let config = PasswordConfig { length: 128, ..Default::default() };
        let password = generate_password_with_rng(&config, &mut rng).unwrap();
        let seen: HashSet<CharacterClass> = password.chars().filter_map(CharacterClass::of).collect();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_concurrent_generation() {
        let config = PasswordConfig::default();
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(move || generate_password(&config).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), config.length);
        }
    }
}
