pub mod error;
mod inputs;
pub mod types;

pub use error::*;
pub use inputs::{ActionInputs, parse_multiline};
pub use types::*;
