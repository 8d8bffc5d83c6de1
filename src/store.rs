// src/store.rs

use crate::error::{NotasError, Result};
use crate::models::LogEntry;
use crate::settings::Settings;
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Points directly at the external notas directory, bypassing
/// removable-medium detection.
pub const EXTERNAL_DIR_ENV: &str = "NOTAS_EXTERNAL_DIR";

/// The log file store. Which of the two roots is active is decided by the
/// settings passed into each operation; `external_root` is `None` whenever
/// no removable medium is mounted.
pub struct LogStore {
    internal_root: PathBuf,
    external_root: Option<PathBuf>,
}

impl LogStore {
    pub fn new(internal_root: PathBuf, external_root: Option<PathBuf>) -> Self {
        LogStore {
            internal_root,
            external_root,
        }
    }

    /// Builds the store from the running environment: app-data directory as
    /// the internal root, first mounted removable medium as the external one.
    pub fn from_env() -> Result<LogStore> {
        let data_dir = dirs::data_dir().ok_or(NotasError::HomeDirNotFound)?;
        let external_root = detect_external_root();
        match &external_root {
            Some(root) => log::debug!("external root: {}", root.display()),
            None => log::debug!("no external storage mounted"),
        }
        Ok(LogStore::new(data_dir.join("notas"), external_root))
    }

    /// Resolves the file selected by the current settings.
    pub fn active_path(&self, settings: &Settings) -> Result<PathBuf> {
        if settings.use_external_storage {
            match &self.external_root {
                Some(root) => Ok(root.join(&settings.filename)),
                None => Err(NotasError::StorageUnavailable),
            }
        } else {
            Ok(self.internal_root.join(&settings.filename))
        }
    }

    /// Appends one formatted entry, creating the file if needed.
    pub fn append(&self, settings: &Settings, entry: &LogEntry) -> Result<()> {
        let path = self.active_path(settings)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(entry.to_line().as_bytes())?;
        log::info!("appended one entry to {}", path.display());
        Ok(())
    }

    /// Returns the file's lines in order. A file that does not exist yet
    /// reads as no content; unmounted external storage is reported instead.
    pub fn read_all(&self, settings: &Settings) -> Result<Vec<String>> {
        let path = self.active_path(settings)?;
        if !path.exists() {
            return Ok(Vec::new());
        }
        let file = fs::File::open(&path)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?;
        Ok(lines)
    }

    /// Deletes the active file. Deleting a file that is not there is the
    /// distinct `NotFound` case; the file is not recreated.
    pub fn clear(&self, settings: &Settings) -> Result<()> {
        let path = self.active_path(settings)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                log::info!("deleted {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(NotasError::NotFound),
            Err(e) => Err(e.into()),
        }
    }
}

/// Finds the external notas directory: the env override if set and mounted,
/// otherwise a `notas` directory on the first volume under /run/media/$USER
/// or /media/$USER.
fn detect_external_root() -> Option<PathBuf> {
    if let Ok(dir) = env::var(EXTERNAL_DIR_ENV) {
        let path = PathBuf::from(dir);
        return path.is_dir().then_some(path);
    }
    let user = env::var("USER").ok()?;
    for base in ["/run/media", "/media"] {
        let media_dir = Path::new(base).join(&user);
        let Ok(entries) = fs::read_dir(&media_dir) else {
            continue;
        };
        if let Some(volume) = entries
            .flatten()
            .map(|e| e.path())
            .find(|p| p.is_dir())
        {
            return Some(volume.join("notas"));
        }
    }
    None
}
