//! Amazon CloudWatch Synthetics.
//!
//! Canaries are managed over REST-JSON with `PascalCase` keys. The canary
//! name is a path label (`/canary/{name}/start`) and `DeleteCanary` carries
//! its `deleteLambda` flag in the query string.

mod client;
pub mod error;
pub mod input;
pub mod operation;
pub mod output;
pub mod types;

pub use client::{SERVICE, SyntheticsClient};
pub use error::{SyntheticsError, SyntheticsErrorDetail};
pub use input::*;
pub use output::*;
pub use types::*;
