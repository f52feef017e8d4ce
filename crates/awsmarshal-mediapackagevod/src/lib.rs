//! AWS Elemental MediaPackage VOD.
//!
//! Only packaging groups are covered. The service is REST-JSON with
//! `camelCase` keys; the group id is a path label and list paging travels
//! in the query string.

mod client;
pub mod error;
pub mod input;
pub mod operation;
pub mod output;
pub mod types;

pub use client::{MediaPackageVodClient, SERVICE};
pub use error::{MediaPackageVodError, MediaPackageVodErrorDetail};
pub use input::*;
pub use output::*;
pub use types::*;
