pub mod filter;
pub mod image;
pub mod print;
pub mod states;
pub mod validation;
