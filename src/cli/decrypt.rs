//! Ad-hoc decrypt command
//!
//! Decrypts one operator-supplied string with the configured key. Useful
//! for inspecting a stored value without going through the application.

use std::io::{self, BufRead, Write};

use crate::config::Settings;
use crate::crypto::Encrypter;
use crate::error::{FieldsealError, FieldsealResult};

/// Handle the `decrypt` command.
///
/// Key precedence: the `--key` argument (or `FIELDSEAL_KEY` env var, merged
/// by clap), then the settings file, then a hidden interactive prompt.
pub fn handle_decrypt_command(settings: &Settings, key: Option<String>) -> FieldsealResult<()> {
    let key = resolve_key(settings, key)?;
    let encrypter = Encrypter::new(&key)?;

    print!("Type here the string to decrypt: ");
    io::stdout().flush()?;

    let mut encoded = String::new();
    io::stdin().lock().read_line(&mut encoded)?;

    match encrypter.decrypt(encoded.trim()) {
        Some(plaintext) => {
            println!();
            println!("Decrypted string:");
            println!("{}", plaintext);
            Ok(())
        }
        None => Err(FieldsealError::Decryption(
            "the string could not be decrypted with the configured key".to_string(),
        )),
    }
}

/// Resolve the key from the argument, the settings file, or a prompt
fn resolve_key(settings: &Settings, key: Option<String>) -> FieldsealResult<String> {
    if let Some(key) = key {
        return Ok(key);
    }

    if let Some(key) = &settings.key {
        return Ok(key.clone());
    }

    rpassword::prompt_password("Encryption key: ")
        .map_err(|e| FieldsealError::Config(format!("failed to read encryption key: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_key_prefers_argument() {
        let mut settings = Settings::default();
        settings.key = Some("from-settings".to_string());

        let key = resolve_key(&settings, Some("from-arg".to_string())).unwrap();
        assert_eq!(key, "from-arg");
    }

    #[test]
    fn test_resolve_key_falls_back_to_settings() {
        let mut settings = Settings::default();
        settings.key = Some("from-settings".to_string());

        let key = resolve_key(&settings, None).unwrap();
        assert_eq!(key, "from-settings");
    }
}
