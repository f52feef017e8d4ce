//! AWS Resource Access Manager.
//!
//! RAM is a REST-JSON service with one fixed path per operation
//! (`/createresourceshare`, `/getresourceshares`, ...) and `camelCase` keys.
//! `DeleteResourceShare` is the odd one out: a `DELETE` whose members travel
//! in the query string.

mod client;
pub mod error;
pub mod input;
pub mod operation;
pub mod output;
pub mod types;

pub use client::{RamClient, SERVICE};
pub use error::{RamError, RamErrorDetail};
pub use input::*;
pub use output::*;
pub use types::*;
