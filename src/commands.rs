// src/commands.rs

use crate::cli::StorageArg;
use crate::error::{NotasError, Result};
use crate::models::{self, LogEntry};
use crate::settings::Settings;
use crate::store::LogStore;
use std::io::{self, BufRead, Write};

/// Handles 'add'. With a message, submits that one note; without one,
/// shows the file and then submits every line read from stdin.
pub fn handle_add(message: Option<String>) -> Result<()> {
    let settings = Settings::load()?;
    let store = LogStore::from_env()?;
    log::info!(
        "add: file \"{}\" on {} storage",
        settings.filename,
        settings.storage_label()
    );

    match message {
        Some(raw) => submit(&store, &settings, &raw),
        None => {
            render(&store, &settings)?;
            println!("One note per line; finish with Ctrl+D.");
            for line in io::stdin().lock().lines() {
                submit(&store, &settings, &line?)?;
            }
            Ok(())
        }
    }
}

/// Handles 'show'.
pub fn handle_show() -> Result<()> {
    let settings = Settings::load()?;
    let store = LogStore::from_env()?;
    log::info!(
        "show: file \"{}\" on {} storage",
        settings.filename,
        settings.storage_label()
    );
    render(&store, &settings)
}

/// Handles 'clear': confirmation prompt, then delete and re-render.
pub fn handle_clear() -> Result<()> {
    let settings = Settings::load()?;
    let store = LogStore::from_env()?;

    println!(
        "This permanently deletes \"{}\" from {} storage.",
        settings.filename,
        settings.storage_label()
    );
    print!("Clear the file? (y/N): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    if !confirmed(&input) {
        println!("Cancelled.");
        return Ok(());
    }

    match store.clear(&settings) {
        Ok(()) => render(&store, &settings),
        Err(NotasError::NotFound) => {
            log::error!("clear failed: {} not found", settings.filename);
            Ok(())
        }
        Err(NotasError::StorageUnavailable) => {
            eprintln!("External storage is not available.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Handles 'config': prints the settings when called bare, updates and
/// saves them otherwise.
pub fn handle_config(filename: Option<String>, storage: Option<StorageArg>) -> Result<()> {
    let mut settings = Settings::load()?;

    if filename.is_none() && storage.is_none() {
        println!("filename = {}", settings.filename);
        println!("storage  = {}", settings.storage_label());
        return Ok(());
    }

    if let Some(name) = filename {
        settings.filename = name;
    }
    if let Some(choice) = storage {
        settings.use_external_storage = matches!(choice, StorageArg::External);
    }
    settings.save()?;
    println!("Settings saved.");
    Ok(())
}

/// Validates one line of input and appends it, then re-renders the file.
fn submit(store: &LogStore, settings: &Settings, raw: &str) -> Result<()> {
    let text = match prepare_note(raw) {
        Some(text) => text,
        None => {
            eprintln!("Empty note, skipped.");
            return Ok(());
        }
    };
    match store.append(settings, &LogEntry::new(text)) {
        Ok(()) => render(store, settings),
        Err(NotasError::StorageUnavailable) => {
            eprintln!("External storage is not available.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// The submit gate: nothing left after trimming means no entry is written;
/// over-long input is cut at a character boundary.
fn prepare_note(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    Some(models::clip(text))
}

/// Prints the whole file, or the empty-file notice.
fn render(store: &LogStore, settings: &Settings) -> Result<()> {
    match store.read_all(settings) {
        Ok(lines) if lines.is_empty() => {
            println!("The file is empty.");
            Ok(())
        }
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        Err(NotasError::StorageUnavailable) => {
            eprintln!("External storage is not available.");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn confirmed(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_NOTE_LEN;
    use tempfile::TempDir;

    #[test]
    fn whitespace_only_input_is_rejected() {
        assert_eq!(prepare_note(""), None);
        assert_eq!(prepare_note("   \t  "), None);
        assert_eq!(prepare_note("\n"), None);
    }

    #[test]
    fn input_is_trimmed_but_kept_verbatim() {
        assert_eq!(prepare_note("  hola mundo  "), Some("hola mundo"));
    }

    #[test]
    fn over_long_input_is_capped() {
        let long = "x".repeat(MAX_NOTE_LEN + 10);
        assert_eq!(prepare_note(&long).unwrap().chars().count(), MAX_NOTE_LEN);
    }

    #[test]
    fn submit_appends_exactly_one_line() {
        let dir = TempDir::new().unwrap();
        let store = LogStore::new(dir.path().to_path_buf(), None);
        let settings = Settings {
            filename: "log.txt".to_string(),
            use_external_storage: false,
        };

        submit(&store, &settings, "  hello  ").unwrap();

        let content = std::fs::read_to_string(dir.path().join("log.txt")).unwrap();
        assert_eq!(content.matches('\n').count(), 1);
        assert!(content.ends_with(": hello\n"));
    }

    #[test]
    fn submitting_whitespace_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let store = LogStore::new(dir.path().to_path_buf(), None);
        let settings = Settings {
            filename: "log.txt".to_string(),
            use_external_storage: false,
        };

        submit(&store, &settings, "   ").unwrap();
        assert!(!dir.path().join("log.txt").exists());
    }

    #[test]
    fn submitting_to_unmounted_external_storage_leaves_no_file() {
        let dir = TempDir::new().unwrap();
        let store = LogStore::new(dir.path().to_path_buf(), None);
        let settings = Settings {
            filename: "log.txt".to_string(),
            use_external_storage: true,
        };

        submit(&store, &settings, "hello").unwrap();
        assert!(!dir.path().join("log.txt").exists());
    }

    #[test]
    fn only_a_plain_y_confirms() {
        assert!(confirmed("y"));
        assert!(confirmed("Y"));
        assert!(confirmed("  y \n"));
        assert!(!confirmed(""));
        assert!(!confirmed("n"));
        assert!(!confirmed("yes"));
    }
}
