use super::RecordStore;
use crate::error::{Result, TodoError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_FILE_NAME: &str = "TODO_Items.txt";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// A store named [`DEFAULT_FILE_NAME`] inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodoError::FileAccess)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("todo");
        let name = format!(".{}-{}.tmp", stem, Uuid::new_v4());
        match self.path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        }
    }
}

impl RecordStore for FileStore {
    fn load_all(&self) -> Result<Vec<String>> {
        if !self.path.exists() {
            log::debug!("store {} does not exist yet", self.path.display());
            return Ok(Vec::new());
        }
        // Hand-edited files may not be UTF-8; keep their lines readable.
        let bytes = fs::read(&self.path).map_err(TodoError::FileAccess)?;
        let content = String::from_utf8_lossy(&bytes);
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        log::debug!("loaded {} line(s) from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    fn save_all(&mut self, lines: &[String]) -> Result<()> {
        self.ensure_parent()?;

        let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
        for line in lines {
            content.push_str(line);
            content.push('\n');
        }

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(TodoError::FileAccess)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TodoError::FileAccess(e));
        }

        log::debug!("wrote {} line(s) to {}", lines.len(), self.path.display());
        Ok(())
    }

    fn append(&mut self, line: &str) -> Result<()> {
        self.ensure_parent()?;

        // A hand-edited file may lack the final newline; don't glue records together.
        let needs_newline = match fs::read(&self.path) {
            Ok(bytes) => !bytes.is_empty() && !bytes.ends_with(b"\n"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => return Err(TodoError::FileAccess(e)),
        };

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(TodoError::FileAccess)?;
        if needs_newline {
            file.write_all(b"\n").map_err(TodoError::FileAccess)?;
        }
        writeln!(file, "{}", line).map_err(TodoError::FileAccess)?;

        log::debug!("appended 1 line to {}", self.path.display());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
