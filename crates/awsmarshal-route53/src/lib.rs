//! Route 53 health checks.
//!
//! Requests are sent with the AWS query protocol (form-encoded `Action` and
//! `Version=2013-04-01`) and answers are read from XML. Route 53 is a global
//! service: every region resolves to `https://route53.amazonaws.com` and
//! requests are signed for `us-east-1`.
//!
//! ```no_run
//! use awsmarshal_core::ClientConfig;
//! use awsmarshal_route53::{GetHealthCheckInput, Route53Client};
//!
//! let client = Route53Client::new(ClientConfig::from_env())?;
//! let out = client.get_health_check(&GetHealthCheckInput::default().with_health_check_id("hc-1"))?;
//! println!("{:?}", out.health_check);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod client;
pub mod error;
pub mod input;
pub mod operation;
pub mod output;
pub mod types;

pub use client::{Route53Client, SERVICE};
pub use error::Route53Error;
pub use input::*;
pub use output::*;
pub use types::*;

/// API version sent with every request.
pub const API_VERSION: &str = "2013-04-01";
