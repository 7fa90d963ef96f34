#![deny(warnings)]
#![deny(clippy::all)]

//! # `reweave`
//!
//! An async client for the Shardbound game's REST API.
//!
//! Requests submitted through a connection are rate limited by a shared
//! token bucket, executed on pooled tasks, and optionally retried with a
//! fixed backoff; failures are classified by HTTP status (see [`ErrorKind`]).
//!
//! ## Quick start
//!
//! ```no_run
//! use reweave::{ConnectionConfig, ShardboundServer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConnectionConfig::new("my-application-id", "st-george.example.com", "lkg");
//! let server = ShardboundServer::new(config)?;
//!
//! // Exchange a Steam session ticket for an authorized connection.
//! let connection = server.authorize("steam-ticket").await?;
//!
//! let user = connection.users().show("some-user-id").await?;
//! println!("{:?}", user.display_name);
//!
//! connection.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Connection tiers
//!
//! - [`ShardboundServer`]: no token; release lookups and login only.
//! - [`PublicApiConnection`]: public-scoped token; limited operation set.
//! - [`AuthorizedApiConnection`]: native-scoped token; full operation set,
//!   able to revoke its own token.

/// Token bucket rate limiting
pub mod bucket;
/// Connection configuration
pub mod config;
/// Token-bearing connections
pub mod connection;
/// Error taxonomy
pub mod error;
/// The request execution core
pub mod executor;
/// Response body reading and decompression
mod reader;
/// Retry policy
pub mod retry;
/// Namespaced endpoint sub-APIs
pub mod resources;
/// Unauthenticated server operations
pub mod server;
/// Typed records for API responses
pub mod types;

pub use crate::bucket::{RateLimit, Refill, TokenBucket};
pub use crate::config::ConnectionConfig;
pub use crate::connection::{AuthorizedApiConnection, PublicApiConnection};
pub use crate::error::{ErrorKind, RequestError};
pub use crate::executor::{EndpointRequest, Executor, Payload, Submission};
pub use crate::retry::RetryPolicy;
pub use crate::server::ShardboundServer;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::types::*;
    pub use crate::{
        AuthorizedApiConnection, ConnectionConfig, ErrorKind, PublicApiConnection, RateLimit,
        RequestError, RetryPolicy, ShardboundServer,
    };
}
