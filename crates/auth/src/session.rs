use tracing::info;

use medtrack_core::{DomainError, DomainResult};

use crate::role::{Capability, capabilities_for};
use crate::user::User;

/// Demo credential accepted for every fixture account.
///
/// Real credential handling is explicitly out of scope; the lookup exists so
/// the login flow has a concrete failure path to exercise.
const FIXTURE_PASSWORD: &str = "password";

/// An authenticated session.
///
/// Created by [`login`], torn down by dropping (or [`Session::logout`]).
/// Components that need the current user take this by reference; there is no
/// ambient session state anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn user(&self) -> &User {
        &self.user
    }

    /// Whether this session's role grants the capability.
    pub fn allows(&self, capability: Capability) -> bool {
        capabilities_for(self.user.role).contains(&capability)
    }

    /// End the session.
    pub fn logout(self) {
        info!(user = %self.user.id, "session ended");
    }
}

/// Authenticate against the fixture user list.
///
/// Email lookup is case-insensitive. Failure is uniform (`Unauthorized`)
/// whether the email is unknown or the password is wrong.
pub fn login(users: &[User], email: &str, password: &str) -> DomainResult<Session> {
    let user = users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email))
        .ok_or(DomainError::Unauthorized)?;
    if password != FIXTURE_PASSWORD {
        return Err(DomainError::Unauthorized);
    }
    info!(user = %user.id, role = %user.role, "session started");
    Ok(Session { user: user.clone() })
}
