use std::sync::Mutex;

use crate::db::{decode, encode, Persistence, StoreError};
use crate::models::employee::Employee;

/// In-process slot. Holds the serialized text so loads go through the same
/// JSON decoding as the file slot.
#[derive(Debug, Default)]
pub struct MemorySlot {
    raw: Mutex<Option<String>>,
    fail_saves: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an arbitrary stored text, e.g. a corrupt snapshot.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
            fail_saves: false,
        }
    }

    /// A slot that rejects every write.
    pub fn read_only(raw: Option<String>) -> Self {
        Self {
            raw: Mutex::new(raw),
            fail_saves: true,
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Persistence for MemorySlot {
    fn load(&self) -> Result<Option<Vec<Employee>>, StoreError> {
        self.raw()
            .map(|raw| decode(raw.as_bytes()))
            .transpose()
    }

    fn save(&self, employees: &[Employee]) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Io {
                path: "memory".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "slot is read-only"),
            });
        }
        let raw = encode(employees)?;
        *self
            .raw
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(raw);
        Ok(())
    }
}
