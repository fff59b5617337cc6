use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const LOCK_FILE_NAME: &str = ".lock";
const LOCK_TIMEOUT: Duration = Duration::from_secs(5);

/// Exclusive `flock` on `<config dir>/.lock`, held by [`SettingsStore`]
/// for one load-mutate-persist cycle.
///
/// The lock file is never removed. Unlinking it while another process
/// waits on the old inode would let a third process lock a fresh file and
/// run alongside the waiter.
///
/// [`SettingsStore`]: crate::storage::SettingsStore
pub struct SettingsLock {
    _file: File,
}

#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not open lock file {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("timed out waiting for {path}: another pls process is writing")]
    Timeout { path: PathBuf },
}

impl SettingsLock {
    pub fn acquire(dir: &Path) -> Result<Self, LockError> {
        Self::acquire_within(dir, LOCK_TIMEOUT)
    }

    fn acquire_within(dir: &Path, timeout: Duration) -> Result<Self, LockError> {
        let path = dir.join(LOCK_FILE_NAME);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::Open {
                path: path.clone(),
                source,
            })?;

        let start = Instant::now();
        while try_lock(&file).is_err() {
            if start.elapsed() >= timeout {
                return Err(LockError::Timeout { path });
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        tracing::debug!(path = %path.display(), "acquired settings lock");
        Ok(SettingsLock { _file: file })
    }
}

#[cfg(unix)]
fn try_lock(file: &File) -> std::io::Result<()> {
    use std::os::unix::io::AsRawFd;
    let result = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

// No advisory locking off Unix.
#[cfg(not(unix))]
fn try_lock(_file: &File) -> std::io::Result<()> {
    Ok(())
}
