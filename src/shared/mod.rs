pub mod error;
pub mod result;
pub mod security;

pub use error::{AuditError, ExitCode};
pub use result::Result;
