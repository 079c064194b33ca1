mod claims;
mod config;
pub(crate) mod lenient;
mod session;

pub use self::claims::{ClaimsError, DecodedTokenClaims};
pub use self::config::{ClientConfig, DEFAULT_BASE_URL};
pub use self::session::{Session, SessionUser};
