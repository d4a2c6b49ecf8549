use crate::domain::ports::Storage;
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Default)]
struct State {
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
    read_only: HashSet<PathBuf>,
    racing: HashMap<PathBuf, Vec<u8>>,
    writes: usize,
}

/// In-memory [`Storage`] for unit tests.
#[derive(Clone, Default)]
pub struct MockStorage {
    state: Arc<Mutex<State>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(self, path: &str) -> Self {
        if let Ok(mut state) = self.state.try_lock() {
            state.dirs.insert(PathBuf::from(path));
        }
        self
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        if let Ok(mut state) = self.state.try_lock() {
            state
                .files
                .insert(PathBuf::from(path), content.as_bytes().to_vec());
        }
        self
    }

    pub fn fail_writes_to(self, path: &str) -> Self {
        if let Ok(mut state) = self.state.try_lock() {
            state.read_only.insert(PathBuf::from(path));
        }
        self
    }

    /// Makes `path` appear with `content` right after the next existence
    /// check on it, as if another process won the race.
    pub fn created_concurrently(self, path: &str, content: &str) -> Self {
        if let Ok(mut state) = self.state.try_lock() {
            state
                .racing
                .insert(PathBuf::from(path), content.as_bytes().to_vec());
        }
        self
    }

    pub async fn get_file(&self, path: &str) -> Option<String> {
        let state = self.state.lock().await;
        state
            .files
            .get(Path::new(path))
            .map(|data| String::from_utf8_lossy(data).into_owned())
    }

    pub async fn has_dir(&self, path: &str) -> bool {
        self.state.lock().await.dirs.contains(Path::new(path))
    }

    pub async fn write_count(&self) -> usize {
        self.state.lock().await.writes
    }
}

impl Storage for MockStorage {
    async fn exists(&self, path: &Path) -> bool {
        let mut state = self.state.lock().await;
        let found = state.files.contains_key(path) || state.dirs.contains(path);
        if let Some(content) = state.racing.remove(path) {
            state.files.insert(path.to_path_buf(), content);
        }
        found
    }

    async fn is_dir(&self, path: &Path) -> io::Result<bool> {
        let state = self.state.lock().await;
        if state.dirs.contains(path) {
            Ok(true)
        } else if state.files.contains_key(path) {
            Ok(false)
        } else {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No such file or directory: {}", path.display()),
            ))
        }
    }

    async fn create_dir(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state.lock().await;
        if state.dirs.contains(path) || state.files.contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Already exists: {}", path.display()),
            ));
        }
        state.dirs.insert(path.to_path_buf());
        Ok(())
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self.state.lock().await;
        state
            .files
            .get(path)
            .map(|data| String::from_utf8_lossy(data).into_owned())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("File not found: {}", path.display()),
                )
            })
    }

    async fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut state = self.state.lock().await;
        if state.read_only.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("Permission denied: {}", path.display()),
            ));
        }
        state.files.insert(path.to_path_buf(), data.to_vec());
        state.writes += 1;
        Ok(())
    }

    async fn create_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        {
            let state = self.state.lock().await;
            if state.files.contains_key(path) || state.dirs.contains(path) {
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("Already exists: {}", path.display()),
                ));
            }
        }
        self.write_file(path, data).await
    }
}
