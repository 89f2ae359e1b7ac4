use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::db::{decode, encode, Persistence, StoreError, STORAGE_KEY};
use crate::models::employee::Employee;

/// The durable slot as a JSON file named after [`STORAGE_KEY`] inside a data
/// directory.
#[derive(Debug, Clone)]
pub struct JsonFileSlot {
    path: PathBuf,
}

impl JsonFileSlot {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }

    fn io_error(path: &Path, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Persistence for JsonFileSlot {
    fn load(&self) -> Result<Option<Vec<Employee>>, StoreError> {
        match fs::read(&self.path) {
            Ok(raw) => decode(&raw).map(Some),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Self::io_error(&self.path, err)),
        }
    }

    fn save(&self, employees: &[Employee]) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|err| Self::io_error(dir, err))?;
        }

        let raw = encode(employees)?;
        let tmp = self.sibling(".tmp");
        fs::write(&tmp, raw).map_err(|err| Self::io_error(&tmp, err))?;
        fs::rename(&tmp, &self.path).map_err(|err| Self::io_error(&self.path, err))?;

        debug!("Saved {} employees to {}", employees.len(), self.path.display());
        Ok(())
    }

    fn quarantine(&self) -> Result<(), StoreError> {
        let target = self.sibling(".corrupt");
        warn!(
            "Moving unreadable roster {} to {}",
            self.path.display(),
            target.display()
        );
        fs::rename(&self.path, &target).map_err(|err| Self::io_error(&self.path, err))
    }
}
