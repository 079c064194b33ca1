use serde::{Deserialize, Serialize};

use super::claims::{ClaimsError, DecodedTokenClaims};
use super::lenient;

/// Cached profile of the logged-in user, persisted next to the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(default)]
    pub username: String,

    #[serde(rename = "userId", default, deserialize_with = "lenient::opt_id")]
    pub user_id: Option<String>,

    #[serde(rename = "isAdmin", default, deserialize_with = "lenient::truthy")]
    pub is_admin: bool,
}

/// Client-held login state.
///
/// A user is only ever carried together with a token; `Session::new` drops a
/// user passed without one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn new(token: Option<String>, user: Option<SessionUser>) -> Self {
        let token = token.filter(|t| !t.is_empty());
        let user = if token.is_some() { user } else { None };
        Self { token, user }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.user.is_none()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Admin flag from the cached profile. Route gating uses the token claims
    /// instead; this only picks landing pages.
    pub fn cached_is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_admin)
    }

    pub fn claims(&self) -> Option<Result<DecodedTokenClaims, ClaimsError>> {
        self.token.as_deref().map(DecodedTokenClaims::decode)
    }
}
