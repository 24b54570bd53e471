pub mod builtin;
pub mod loader;
pub mod types;
pub mod validation;

pub use builtin::builtin_bank;
pub use loader::{load_bank, parse_bank, BankError};
pub use types::*;
pub use validation::validate_bank;
