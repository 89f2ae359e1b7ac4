use std::path::PathBuf;

use thiserror::Error;
use validator::ValidationErrors;

use crate::models::employee::Employee;

pub mod file;
pub mod memory;
pub mod seed;

pub use file::JsonFileSlot;
pub use memory::MemorySlot;

/// Name of the single durable slot holding the serialized roster.
pub const STORAGE_KEY: &str = "employees_data";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored roster is unreadable: {0}")]
    Corrupt(#[source] serde_json::Error),
    #[error("failed to serialize roster: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("invalid employee data: {0}")]
    Validation(#[from] ValidationErrors),
}

/// Durable home of the employee collection.
///
/// The whole collection is read and written at once; there are no partial
/// updates.
pub trait Persistence {
    /// Returns `None` when nothing has been stored yet.
    fn load(&self) -> Result<Option<Vec<Employee>>, StoreError>;

    fn save(&self, employees: &[Employee]) -> Result<(), StoreError>;

    /// Moves an unreadable snapshot out of the way before it is replaced.
    fn quarantine(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Anything that does not parse as a roster, including bytes that are not
/// UTF-8, is reported as [`StoreError::Corrupt`].
pub(crate) fn decode(raw: &[u8]) -> Result<Vec<Employee>, StoreError> {
    serde_json::from_slice(raw).map_err(StoreError::Corrupt)
}

pub(crate) fn encode(employees: &[Employee]) -> Result<String, StoreError> {
    serde_json::to_string(employees).map_err(StoreError::Serialize)
}

impl<P: Persistence + ?Sized> Persistence for Box<P> {
    fn load(&self) -> Result<Option<Vec<Employee>>, StoreError> {
        (**self).load()
    }

    fn save(&self, employees: &[Employee]) -> Result<(), StoreError> {
        (**self).save(employees)
    }

    fn quarantine(&self) -> Result<(), StoreError> {
        (**self).quarantine()
    }
}
