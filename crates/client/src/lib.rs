//! NOSTOS API client
//!
//! Typed access to the NOSTOS alumni fundraising API with a persistent
//! session. Expired access tokens are renewed transparently: a call rejected
//! with `401` is refreshed and replayed once, and a refresh failure ends the
//! session and notifies the registered session-expired hook.

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use client::{NostosClient, NostosClientBuilder, RequestOptions, SessionExpiredHook};
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use session::{
    FileSessionStore, MemorySessionStore, Session, SessionState, SessionStore,
};
