//! Client for a Q&A forum backend.
//!
//! The crate is split the way a single-page client is: a persisted
//! [`store::SessionStore`], one outbound [`remote::ForumClient`] that owns the
//! bearer-token policy, a [`guard::RouteGuard`] evaluated before any gated
//! view mounts, and per-view state in [`screens`].

pub mod context;
pub mod guard;
pub mod model;
pub mod navigation;
pub mod remote;
pub mod routes;
pub mod scope;
pub mod screens;
pub mod store;
pub mod validation;

pub use self::context::AppContext;
