//! Medidesk — client core for a hospital operations console.
//!
//! Everything the console's pages share lives here: the typed API client
//! against the hospital backend, the session store it reads bearer tokens
//! from, the dashboard-shell route guard with its role-filtered menu, and
//! the single-pass report aggregations. The rendering layer sits on top
//! and is not this crate's concern.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod session;
pub mod shell;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::{FileStore, MemoryStore, Session, SessionStore};
pub use shell::{GuardState, RouteGuard};

use tracing_subscriber::EnvFilter;

/// Install the default tracing subscriber. Binaries and examples call this
/// once at startup; the library itself never does.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();
}
