pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;

pub use db::{JsonFileSlot, MemorySlot, Persistence, StoreError, STORAGE_KEY};
pub use models::employee::{Employee, EmployeeForm, EmployeeId, Gender, Stats};
pub use store::{Outcome, RecordStore};
pub use utils::filter::{filter, Criteria, GenderFilter, StatusFilter};
pub use utils::validation::{field_messages, validate_on};
