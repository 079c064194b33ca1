//! Route gating.
//!
//! Every gated view goes through one [`RouteGuard`] parameterized by the
//! route's [`RouteAccess`]; screens never repeat the check themselves.

use crate::model::{DecodedTokenClaims, Session};
use crate::navigation::{ENTRY_PATH, Navigator};
use crate::routes::{Route, RouteAccess};
use crate::store::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardState {
    Unchecked,
    Authorized,
    Denied,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    MissingToken,
    UndecodableToken,
    NotAdmin,
}

impl DenyReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DenyReason::MissingToken => "not logged in",
            DenyReason::UndecodableToken => "stored token could not be decoded",
            DenyReason::NotAdmin => "admin access required",
        }
    }
}

/// Decide whether `session` may mount a route with the given access level.
///
/// Admin routes trust only the token's own claim; the cached profile is
/// ignored.
pub fn check_access(access: RouteAccess, session: &Session) -> Result<(), DenyReason> {
    if access == RouteAccess::Public {
        return Ok(());
    }
    let token = session.token.as_deref().ok_or(DenyReason::MissingToken)?;
    let claims = DecodedTokenClaims::decode(token).map_err(|_| DenyReason::UndecodableToken)?;
    if access == RouteAccess::AdminOnly && !claims.is_admin {
        return Err(DenyReason::NotAdmin);
    }
    Ok(())
}

/// One evaluation of a route's access rule.
///
/// Starts `Unchecked`; the first [`RouteGuard::evaluate`] settles it to
/// `Authorized` or `Denied` and later calls return the settled state.
#[derive(Clone, Debug)]
pub struct RouteGuard {
    access: RouteAccess,
    state: GuardState,
    reason: Option<DenyReason>,
}

impl RouteGuard {
    pub fn new(access: RouteAccess) -> Self {
        Self {
            access,
            state: GuardState::Unchecked,
            reason: None,
        }
    }

    pub fn access(&self) -> RouteAccess {
        self.access
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn reason(&self) -> Option<DenyReason> {
        self.reason
    }

    pub fn evaluate(&mut self, session: &Session) -> GuardState {
        if self.state != GuardState::Unchecked {
            return self.state;
        }
        match check_access(self.access, session) {
            Ok(()) => self.state = GuardState::Authorized,
            Err(reason) => {
                self.state = GuardState::Denied;
                self.reason = Some(reason);
            }
        }
        self.state
    }
}

/// Mounts routes: runs the guard, then moves the navigator.
pub struct Router<'a> {
    session: &'a dyn SessionStore,
    navigator: &'a Navigator,
}

impl<'a> Router<'a> {
    pub fn new(session: &'a dyn SessionStore, navigator: &'a Navigator) -> Self {
        Self { session, navigator }
    }

    /// Navigate to `route` if its guard authorizes the current session.
    ///
    /// A denied route redirects (replacing history) to the entry route and
    /// is not retried.
    pub fn open(&self, route: &Route) -> RouteGuard {
        let mut guard = RouteGuard::new(route.access());
        match guard.evaluate(&self.session.get_session()) {
            GuardState::Authorized => self.navigator.navigate(&route.path()),
            _ => {
                tracing::info!(
                    route = %route,
                    reason = guard.reason().map(|r| r.as_str()).unwrap_or("unknown"),
                    "route denied; redirecting to entry"
                );
                self.navigator.replace(ENTRY_PATH);
            }
        }
        guard
    }
}

#[cfg(test)]
#[path = "tests/guard_tests.rs"]
mod tests;
