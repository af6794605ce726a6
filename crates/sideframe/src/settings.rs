//! Persisted sideframe settings.
//!
//! The settings store is an external collaborator keyed under a `sideframe`
//! namespace. The controller reads it once at the start of every `open()`
//! (to prefer a remembered width over a computed default) and writes it once
//! per load completion. Storage failures never panic; the controller logs
//! and degrades.
//!
//! # Feature Gates
//!
//! - `state-persistence`: enables [`FileSettings`] with atomic JSON
//!   write-rename. Without this feature, only [`MemorySettings`] is
//!   available.

use std::fmt;
use std::sync::RwLock;

#[cfg(feature = "state-persistence")]
use serde::{Deserialize, Serialize};

/// Errors that can occur during settings storage operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error during file operations.
    Io(std::io::Error),
    /// Serialization or deserialization error.
    #[cfg(feature = "state-persistence")]
    Serialization(String),
    /// Stored data is corrupted or a lock was poisoned.
    Corruption(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            #[cfg(feature = "state-persistence")]
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
            Self::Corruption(msg) => write!(f, "storage corruption: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            #[cfg(feature = "state-persistence")]
            Self::Serialization(_) => None,
            Self::Corruption(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// The persisted `sideframe` namespace.
///
/// `position` is only written after a successful open with a resolved width;
/// `url` records the final address the embedded document ended at.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "state-persistence", derive(Serialize, Deserialize))]
pub struct SideframeSettings {
    /// Last successfully loaded address.
    pub url: Option<String>,
    /// Remembered panel width in pixels.
    pub position: Option<f64>,
}

/// Read/write access to the persisted `sideframe` namespace.
///
/// Implementations must be thread-safe; the single expected writer is the
/// controller, so last-write-wins is sufficient.
pub trait SettingsStore: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Load the stored settings. Returns the default (empty) settings when
    /// nothing has been persisted yet.
    fn load(&self) -> StorageResult<SideframeSettings>;

    /// Replace the stored settings.
    fn save(&self, settings: &SideframeSettings) -> StorageResult<()>;

    /// Remove all stored settings.
    fn clear(&self) -> StorageResult<()>;
}

/// In-memory settings store for testing and ephemeral sessions.
#[derive(Default)]
pub struct MemorySettings {
    data: RwLock<SideframeSettings>,
}

impl MemorySettings {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with settings.
    #[must_use]
    pub fn with_settings(settings: SideframeSettings) -> Self {
        Self {
            data: RwLock::new(settings),
        }
    }
}

impl SettingsStore for MemorySettings {
    fn name(&self) -> &str {
        "MemorySettings"
    }

    fn load(&self) -> StorageResult<SideframeSettings> {
        let guard = self
            .data
            .read()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save(&self, settings: &SideframeSettings) -> StorageResult<()> {
        let mut guard = self
            .data
            .write()
            .map_err(|_| StorageError::Corruption("lock poisoned".into()))?;
        *guard = settings.clone();
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.save(&SideframeSettings::default())
    }
}

impl fmt::Debug for MemorySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let populated = self
            .data
            .read()
            .map(|g| g.url.is_some() || g.position.is_some())
            .unwrap_or(false);
        f.debug_struct("MemorySettings")
            .field("populated", &populated)
            .finish()
    }
}

#[cfg(feature = "state-persistence")]
mod file_settings {
    use super::*;
    use std::fs::{self, File};
    use std::io::{BufReader, BufWriter, Write};
    use std::path::{Path, PathBuf};

    /// On-disk format. The `sideframe` field keeps the namespace key the
    /// surrounding system stores these settings under.
    #[derive(Serialize, Deserialize)]
    struct SettingsFile {
        format_version: u32,
        sideframe: SideframeSettings,
    }

    impl SettingsFile {
        const FORMAT_VERSION: u32 = 1;
    }

    /// JSON file-backed settings store with atomic write-rename.
    pub struct FileSettings {
        path: PathBuf,
    }

    impl FileSettings {
        /// Store backed by the given file. The file is created on first save.
        #[must_use]
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// The backing file path.
        #[must_use]
        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl SettingsStore for FileSettings {
        fn name(&self) -> &str {
            "FileSettings"
        }

        fn load(&self) -> StorageResult<SideframeSettings> {
            if !self.path.exists() {
                return Ok(SideframeSettings::default());
            }
            let reader = BufReader::new(File::open(&self.path)?);
            let file: SettingsFile = serde_json::from_reader(reader)
                .map_err(|e| StorageError::Serialization(e.to_string()))?;
            if file.format_version != SettingsFile::FORMAT_VERSION {
                return Err(StorageError::Corruption(format!(
                    "unsupported format version {}",
                    file.format_version
                )));
            }
            Ok(file.sideframe)
        }

        fn save(&self, settings: &SideframeSettings) -> StorageResult<()> {
            let file = SettingsFile {
                format_version: SettingsFile::FORMAT_VERSION,
                sideframe: settings.clone(),
            };
            // Write-then-rename so a crash mid-write cannot corrupt the
            // previous settings.
            let tmp = self.path.with_extension("tmp");
            {
                let mut writer = BufWriter::new(File::create(&tmp)?);
                serde_json::to_writer_pretty(&mut writer, &file)
                    .map_err(|e| StorageError::Serialization(e.to_string()))?;
                writer.flush()?;
            }
            fs::rename(&tmp, &self.path)?;
            Ok(())
        }

        fn clear(&self) -> StorageResult<()> {
            if self.path.exists() {
                fs::remove_file(&self.path)?;
            }
            Ok(())
        }
    }

    impl fmt::Debug for FileSettings {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("FileSettings")
                .field("path", &self.path)
                .finish()
        }
    }
}

#[cfg(feature = "state-persistence")]
pub use file_settings::FileSettings;
