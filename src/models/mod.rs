pub mod employee;
pub mod file;
