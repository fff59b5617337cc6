use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::lock::SettingsLock;
use crate::model::{SettingsDocument, Task};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default location: `~/.config/pls`, falling back to the platform config dir.
pub fn default_config_dir() -> PathBuf {
    if let Some(mut home) = dirs::home_dir() {
        home.push(".config");
        home.push("pls");
        return home;
    }
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push("pls");
    base
}

/// Owns `config.json`. Every query re-reads the file, so results always
/// reflect the last persisted state.
#[derive(Clone, Debug)]
pub struct SettingsStore {
    dir: PathBuf,
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(CONFIG_FILE_NAME);
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<SettingsDocument> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no settings file, using defaults");
                return Ok(SettingsDocument::default());
            }
            Err(source) => {
                return Err(Error::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| {
            tracing::warn!(path = %self.path.display(), %source, "settings file is corrupt");
            Error::ConfigCorrupt {
                path: self.path.clone(),
                source,
            }
        })
    }

    /// Replace the whole file with `doc`.
    pub fn persist(&self, doc: &SettingsDocument) -> Result<()> {
        self.ensure_dir()?;
        let bytes = serde_json::to_vec_pretty(doc).map_err(Error::Serialize)?;
        atomic_write(&self.path, &bytes).map_err(|source| Error::Write {
            path: self.path.clone(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), tasks = doc.tasks.len(), "settings persisted");
        Ok(())
    }

    /// Load, apply `f`, and persist only when `f` succeeds. The settings
    /// directory stays locked for the whole cycle.
    pub fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut SettingsDocument) -> Result<T>,
    {
        self.ensure_dir()?;
        let _lock = SettingsLock::acquire(&self.dir)?;
        let mut doc = self.load()?;
        let value = f(&mut doc)?;
        self.persist(&doc)?;
        Ok(value)
    }

    /// Overwrite the file under the lock without reading it first, so a
    /// corrupt file can still be reset.
    pub fn replace(&self, doc: &SettingsDocument) -> Result<()> {
        self.ensure_dir()?;
        let _lock = SettingsLock::acquire(&self.dir)?;
        self.persist(doc)
    }

    pub fn name(&self) -> Result<String> {
        Ok(self.load()?.user_name)
    }

    pub fn tasks(&self) -> Result<Vec<Task>> {
        Ok(self.load()?.tasks)
    }

    pub fn show_task_progress(&self) -> Result<bool> {
        Ok(self.load()?.show_task_progress)
    }

    pub fn show_quotes(&self) -> Result<bool> {
        Ok(self.load()?.show_quotes)
    }

    pub fn all_done(&self) -> Result<bool> {
        Ok(self.load()?.all_done())
    }

    pub fn undone_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.load()?.undone_tasks())
    }

    pub fn count_done(&self) -> Result<usize> {
        Ok(self.load()?.count_done())
    }

    pub fn count_undone(&self) -> Result<usize> {
        Ok(self.load()?.count_undone())
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| Error::Write {
            path: self.dir.clone(),
            source,
        })
    }
}

fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use tempfile::TempDir;

    fn store() -> (TempDir, SettingsStore) {
        let tmp = TempDir::new().unwrap();
        let store = SettingsStore::new(tmp.path().join("pls"));
        (tmp, store)
    }

    #[test]
    fn missing_file_loads_defaults() {
        let (_tmp, store) = store();
        assert!(!store.exists());
        assert_eq!(store.load().unwrap(), SettingsDocument::default());
        assert_eq!(store.count_done().unwrap(), 0);
        assert!(store.all_done().unwrap());
    }

    #[test]
    fn persist_then_load() {
        let (_tmp, store) = store();
        let doc = SettingsDocument {
            user_name: "Ana".into(),
            initial_setup_done: true,
            show_quotes: false,
            tasks: vec![Task::new("A")],
            ..SettingsDocument::default()
        };
        store.persist(&doc).unwrap();

        assert!(store.exists());
        assert_eq!(store.load().unwrap(), doc);
        assert_eq!(store.name().unwrap(), "Ana");
        assert!(!store.show_quotes().unwrap());
        assert!(store.show_task_progress().unwrap());
        assert_eq!(store.count_undone().unwrap(), 1);
    }

    #[test]
    fn persisted_json_is_indented() {
        let (_tmp, store) = store();
        store.persist(&SettingsDocument::default()).unwrap();
        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\n  \"tasks\": []"));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let (_tmp, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(Error::ConfigCorrupt { .. })));
        assert!(matches!(store.tasks(), Err(Error::ConfigCorrupt { .. })));
    }

    #[test]
    fn replace_resets_corrupt_file() {
        let (_tmp, store) = store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "[[[").unwrap();

        store.replace(&SettingsDocument::default()).unwrap();
        assert_eq!(store.load().unwrap(), SettingsDocument::default());
    }

    #[test]
    fn failed_update_leaves_file_untouched() {
        let (_tmp, store) = store();
        store.persist(&SettingsDocument::default()).unwrap();
        let before = fs::read(store.path()).unwrap();

        let result: Result<()> = store.update(|doc| {
            doc.tasks.push(Task::new("never saved"));
            Err(TaskError::NoUpdate.into())
        });

        assert!(matches!(result, Err(Error::Task(TaskError::NoUpdate))));
        assert_eq!(fs::read(store.path()).unwrap(), before);
    }

    #[test]
    fn successful_update_persists() {
        let (_tmp, store) = store();
        let len = store
            .update(|doc| {
                doc.tasks.push(Task::new("A"));
                Ok(doc.tasks.len())
            })
            .unwrap();

        assert_eq!(len, 1);
        assert_eq!(store.tasks().unwrap(), vec![Task::new("A")]);
        // released, but the lock file stays behind for the next writer
        assert!(store.dir.join(".lock").exists());
        assert!(SettingsLock::acquire(&store.dir).is_ok());
    }
}
