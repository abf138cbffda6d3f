use anyhow::Result;
use clap::{Parser, Subcommand};

use fieldseal::cli::{handle_config_command, handle_decrypt_command};
use fieldseal::config::{FieldsealPaths, Settings};

#[derive(Parser)]
#[command(
    name = "fieldseal",
    version,
    about = "Transparent field-level encryption for persisted records",
    long_about = "fieldseal encrypts selected record attributes before they are \
                  written to storage and decrypts them when they are read back. \
                  This binary provides ad-hoc access to the same engine for \
                  operators inspecting stored values."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decrypt a stored value using the configured key
    Decrypt {
        /// Encryption key (falls back to the settings file, then to a prompt)
        #[arg(short, long, env = "FIELDSEAL_KEY", hide_env_values = true)]
        key: Option<String>,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = FieldsealPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Decrypt { key }) => {
            handle_decrypt_command(&settings, key)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
        None => {
            println!("fieldseal - field-level encryption for persisted records");
            println!();
            println!("Run 'fieldseal --help' for usage information.");
            println!("Run 'fieldseal decrypt' to decrypt a stored value.");
        }
    }

    Ok(())
}
