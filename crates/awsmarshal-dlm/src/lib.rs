//! Amazon Data Lifecycle Manager.
//!
//! DLM speaks REST-JSON: each operation has its own method and URI
//! (`/policies`, `/policies/{PolicyId}/`), bodies use `PascalCase` keys and
//! list filters travel as repeated query-string parameters.

mod client;
pub mod error;
pub mod input;
pub mod operation;
pub mod output;
pub mod types;

pub use client::{DlmClient, SERVICE};
pub use error::DlmError;
pub use input::*;
pub use output::*;
pub use types::*;
