//! # urgentbox-classifier
//!
//! HTTP client for the urgency classification service.
//!
//! The service takes a message subject and body and answers with an urgency
//! label, usually one of `high`, `medium` or `low`.
//!
//! ## Wire format
//!
//! ```text
//! POST {base_url}/urgency/get
//! Content-Type: application/json
//!
//! { "subject": "Server down", "message": "Production is unreachable" }
//!
//! HTTP/1.1 200 OK
//! { "urgency": "High" }
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use urgentbox_classifier::{ClassifierClient, Endpoint};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let endpoint = Endpoint::new("http://localhost:8000")?;
//!     let client = ClassifierClient::with_timeout(endpoint, Duration::from_secs(5))?;
//!
//!     let urgency = client.classify("Server down", "Production is unreachable").await?;
//!     println!("urgency: {urgency}");
//!     Ok(())
//! }
//! ```
//!
//! The client reports every failure as an [`Error`]. Deciding what to do when
//! the service is unavailable is left to the caller.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

mod client;
mod endpoint;
mod error;
pub mod wire;

pub use client::ClassifierClient;
pub use endpoint::{Endpoint, URGENCY_PATH};
pub use error::{Error, Result};
