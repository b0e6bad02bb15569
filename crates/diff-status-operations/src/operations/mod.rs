mod exempt;

pub use exempt::{ExemptInput, ExemptOperation, ExemptOutcome};
