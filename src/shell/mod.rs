//! Dashboard shell: route guard and role-filtered menu.
//!
//! The guard runs on every shell mount and resolves the identity check to
//! one of two terminal states. Any failure — expired token, no token,
//! unreachable backend — lands in `Redirecting` with no detail surfaced;
//! the landing page is the one recovery path for all of them.

pub mod menu;

pub use menu::{visible_menu, MenuEntry, MENU};

use crate::client::ApiClient;
use crate::models::UserProfile;

/// Guard lifecycle. `Checking` is the only non-terminal state.
#[derive(Debug, Clone)]
pub enum GuardState {
    /// Identity check in flight; the shell renders nothing yet.
    Checking,
    /// Check passed; children render with this profile.
    Authenticated(UserProfile),
    /// Check failed; navigation to the landing route supersedes the shell.
    Redirecting,
}

impl GuardState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, GuardState::Authenticated(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            GuardState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// One guard per shell mount.
#[derive(Debug)]
pub struct RouteGuard {
    state: GuardState,
}

impl RouteGuard {
    /// Entered on shell mount, in `Checking`.
    pub fn mount() -> Self {
        Self {
            state: GuardState::Checking,
        }
    }

    pub fn state(&self) -> &GuardState {
        &self.state
    }

    /// Run the identity check and settle into a terminal state.
    ///
    /// Transport failures and rejected tokens are deliberately not
    /// distinguished here; both redirect.
    pub async fn resolve(&mut self, client: &ApiClient) -> &GuardState {
        match client.current_user().await {
            Ok(user) => {
                tracing::debug!(username = %user.username, role = %user.role, "shell authenticated");
                self.state = GuardState::Authenticated(user);
            }
            Err(err) => {
                tracing::debug!(error = %err, "identity check failed; redirecting to landing");
                self.state = GuardState::Redirecting;
            }
        }
        &self.state
    }
}
