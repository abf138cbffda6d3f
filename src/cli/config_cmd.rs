//! Configuration display command

use crate::config::{FieldsealPaths, Settings};
use crate::error::FieldsealResult;

/// Handle the `config` command.
///
/// Prints paths and whether a key is configured. Never prints the key.
pub fn handle_config_command(paths: &FieldsealPaths, settings: &Settings) -> FieldsealResult<()> {
    println!("Fieldseal Configuration");
    println!("=======================");
    println!("Config directory: {}", paths.config_dir().display());
    println!("Settings file:    {}", paths.settings_file().display());
    println!();

    if settings.has_key() {
        println!("Encryption key: configured");
    } else {
        println!("Encryption key: not configured");
        println!("Add a \"key\" entry to the settings file, or pass --key to commands.");
    }

    Ok(())
}
