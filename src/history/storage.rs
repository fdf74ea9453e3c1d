use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Durable backing for the history list: a single slot holding one document.
pub trait HistoryStorage: Send {
    /// Return the stored document, or `None` if nothing has been stored yet.
    fn read(&self) -> io::Result<Option<String>>;

    /// Replace the stored document.
    fn write(&mut self, contents: &str) -> io::Result<()>;
}

/// Stores history as a JSON file, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HistoryStorage for JsonFileStorage {
    fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        {
            let mut file = File::create(&temp)?;
            file.write_all(contents.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp, &self.path)
    }
}

/// In-process storage, used for `--ephemeral-history` and in tests.
///
/// Clones share the same slot, so a handle kept by the caller observes what
/// the store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
    fail_writes: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with `contents`.
    #[must_use]
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(contents.into()))),
            fail_writes: false,
        }
    }

    /// Storage whose writes always fail, as when a quota is exceeded.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            slot: Arc::default(),
            fail_writes: true,
        }
    }

    /// Current contents of the slot.
    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl HistoryStorage for MemoryStorage {
    fn read(&self) -> io::Result<Option<String>> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| io::Error::other("history slot poisoned"))?;
        Ok(slot.clone())
    }

    fn write(&mut self, contents: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::other("history storage quota exceeded"));
        }
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| io::Error::other("history slot poisoned"))?;
        *slot = Some(contents.to_string());
        Ok(())
    }
}
