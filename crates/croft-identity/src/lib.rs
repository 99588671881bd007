//! Croft identity - Layer 3: accounts and sessions
//!
//! Two services live here. The credential service owns signup,
//! login, and the digest-free profile projection. The session service
//! issues and verifies the signed, time-bounded tokens that prove an
//! account's identity and role on every subsequent request.
//!
//! Login failures are deliberately indistinguishable to the caller;
//! whether the email was unknown or the password wrong survives only in
//! tracing diagnostics.

pub mod credentials;
pub mod session;

pub use credentials::CredentialService;
pub use session::{SessionConfig, SessionService, SessionToken, SESSION_TTL_MS};
