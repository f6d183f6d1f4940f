use clap::Subcommand;
use rpassgen::configtool::{self, Defaults};

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the current defaults
    Show,

    /// Change saved defaults; unspecified values are kept
    Set {
        #[arg(short, long)]
        length: Option<usize>,
        #[arg(long)]
        uppercase: Option<bool>,
        #[arg(long)]
        lowercase: Option<bool>,
        #[arg(long)]
        digits: Option<bool>,
        #[arg(long)]
        symbols: Option<bool>,
        #[arg(short, long)]
        batch_count: Option<usize>,
    },

    /// Delete the saved defaults
    Reset,

    /// Print the config file location
    Path,
}

pub fn run(action: ConfigAction) -> Result<(), String> {
    let dir = configtool::get_config_dir().map_err(|e| e.to_string())?;
    match action {
        ConfigAction::Show => {
            let defaults = configtool::load_defaults_from(&dir)
                .map_err(|e| format!("Failed to load defaults: {}", e))?;
            let out = serde_json::to_string_pretty(&defaults)
                .map_err(|e| format!("Failed to serialize defaults: {}", e))?;
            println!("{}", out);
        },
        ConfigAction::Set { length, uppercase, lowercase, digits, symbols, batch_count } => {
            let current = configtool::load_defaults_from(&dir)
                .map_err(|e| format!("Failed to load defaults: {}", e))?;
            let updated = Defaults {
                length: length.unwrap_or(current.length),
                uppercase: uppercase.unwrap_or(current.uppercase),
                lowercase: lowercase.unwrap_or(current.lowercase),
                digits: digits.unwrap_or(current.digits),
                symbols: symbols.unwrap_or(current.symbols),
                batch_count: batch_count.unwrap_or(current.batch_count),
            };
            configtool::save_defaults_to(&dir, &updated)
                .map_err(|e| format!("Defaults not saved: {}", e))?;
            println!("Defaults saved.");
        },
        ConfigAction::Reset => {
            configtool::reset_defaults_in(&dir)
                .map_err(|e| format!("Failed to reset defaults: {}", e))?;
            println!("Defaults reset.");
        },
        ConfigAction::Path => {
            println!("{}", configtool::config_file_path(&dir).display());
        },
    }
    Ok(())
}
