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
// Command line front end

use clap::{Parser, Subcommand};
use log::LevelFilter;

mod commands;

use commands::config::ConfigAction;

#[derive(Debug, Parser)]
#[command(name = "rpassgen")]
#[command(about = "Random password generator with strength estimation", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate one or more random passwords
    Gen(GenArgs),

    /// Test password strength
    Testpass(TestpassArgs),

    /// List the preset templates
    Templates,

    /// Show or change the saved defaults
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Parser)]
pub struct GenArgs {
    /// Start from a preset template (standard, pin, memorable, strong)
    #[arg(short, long)]
    pub template: Option<String>,

    /// Length of the password (8-128)
    #[arg(short, long)]
    pub length: Option<usize>,

    /// Exclude uppercase letters
    #[arg(long, default_value_t = false)]
    pub no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long, default_value_t = false)]
    pub no_lowercase: bool,

    /// Exclude digits
    #[arg(long, default_value_t = false)]
    pub no_digits: bool,

    /// Exclude symbols
    #[arg(long, default_value_t = false)]
    pub no_symbols: bool,

    /// Number of passwords to generate (1-100)
    #[arg(short, long)]
    pub batch: Option<usize>,

    /// Print results as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct TestpassArgs {
    /// Password to test
    pub password: String,

    /// Show zxcvbn suggestions as well
    #[arg(short, long, default_value_t = false)]
    pub feedback: bool,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose > 0 {
        let level = match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

fn main() -> Result<(), String> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Gen(args) => commands::password_gen::generate(args),
        Commands::Testpass(args) => commands::testpass::test_password(args),
        Commands::Templates => commands::templates::list_templates(),
        Commands::Config { action } => commands::config::run(action),
    }
}
