use log::info;
use serde::Serialize;
use rpassgen::configtool::{self, validate_batch_count};
use rpassgen::passgen::{self, PasswordConfig};
use rpassgen::strength::{estimate_strength, StrengthResult};
use rpassgen::templates::find_template;

use crate::GenArgs;
use super::format_strength;

#[derive(Debug, Serialize)]
struct GeneratedEntry {
    password: String,
    #[serde(flatten)]
    strength: StrengthResult,
}

/// Builds the working config: saved defaults, replaced wholesale by a
/// template, then narrowed by explicit flags.
fn working_config(args: &GenArgs, base: PasswordConfig) -> Result<PasswordConfig, String> {
    let mut config = match &args.template {
        Some(key) => find_template(key).map_err(|e| e.to_string())?.config,
        None => base,
    };
    if let Some(length) = args.length {
        config.length = length;
    }
    if args.no_uppercase { config.uppercase = false; }
    if args.no_lowercase { config.lowercase = false; }
    if args.no_digits { config.digits = false; }
    if args.no_symbols { config.symbols = false; }
    Ok(config)
}

pub fn generate(args: GenArgs) -> Result<(), String> {
    let defaults = configtool::load_defaults()
        .map_err(|e| format!("Failed to load defaults: {}", e))?;
    let config = working_config(&args, defaults.config())?;
    let count = args.batch.unwrap_or(defaults.batch_count);
    validate_batch_count(count).map_err(|e| e.to_string())?;

    info!("Generating {} password(s) of length {}", count, config.length);
    let mut entries = Vec::with_capacity(count);
    for _ in 0..count {
        let password = passgen::generate_password(&config)
            .map_err(|e| format!("Failed to generate password: {}", e))?;
        let strength = estimate_strength(&password);
        entries.push(GeneratedEntry { password, strength });
    }

    if args.json {
        let out = if entries.len() == 1 {
            serde_json::to_string_pretty(&entries[0])
        } else {
            serde_json::to_string_pretty(&entries)
        };
        println!("{}", out.map_err(|e| format!("Failed to serialize output: {}", e))?);
    } else if entries.len() == 1 {
        println!("Generated password: {}", entries[0].password);
        println!("Strength: {}", format_strength(&entries[0].strength));
    } else {
        println!("Generated {} passwords:", entries.len());
        for (i, entry) in entries.iter().enumerate() {
            println!("{:>3}. {}  {}", i + 1, entry.password, format_strength(&entry.strength));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(template: Option<&str>, length: Option<usize>) -> GenArgs {
        GenArgs {
            template: template.map(str::to_string),
            length,
            no_uppercase: false,
            no_lowercase: false,
            no_digits: false,
            no_symbols: false,
            batch: None,
            json: false,
        }
    }

    #[test]
    fn test_template_replaces_base() {
        let base = PasswordConfig::new(50, true, true, true, true);
        let config = working_config(&args(Some("pin"), None), base).unwrap();
        assert_eq!(config, PasswordConfig::new(8, false, false, true, false));
    }

    #[test]
    fn test_flags_override_template() {
        let mut a = args(Some("standard"), Some(20));
        a.no_symbols = true;
        let config = working_config(&a, PasswordConfig::default()).unwrap();
        assert_eq!(config, PasswordConfig::new(20, true, true, true, false));
    }

    #[test]
    fn test_unknown_template() {
        let err = working_config(&args(Some("nope"), None), PasswordConfig::default()).unwrap_err();
        assert!(err.contains("nope"));
    }
}
