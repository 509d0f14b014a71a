//! Quobyte API Client Library
//!
//! Typed access to the Quobyte storage management API. Each operation is a
//! single JSON-RPC 2.0 call sent over HTTP POST with basic authentication.
//!
//! ```no_run
//! use quobyte_api::{CreateVolumeRequest, QuobyteClient};
//!
//! # async fn run() -> quobyte_api::QuobyteResult<()> {
//! let client = QuobyteClient::new("http://quobyte-api:7860", "admin", "quobyte");
//! let uuid = client
//!     .create_volume(&CreateVolumeRequest::new("scratch").root_user_id("root"))
//!     .await?;
//! client.delete_volume(&uuid).await?;
//! # Ok(())
//! # }
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod utils;

// Re-export commonly used types for convenience
pub use clients::*;
pub use config::QuobyteSettings;
pub use error::{QuobyteError, QuobyteResult};
