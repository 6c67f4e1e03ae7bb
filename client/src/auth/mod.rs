//! Session core: credential blob, persistent store, auth service, route guard.
//!
//! ARCHITECTURE
//! ============
//! `store` persists the encoded credential blob, `service` owns the
//! Unauthenticated/Authenticated state machine on top of it, and `guard`
//! turns the current session plus a required role into a navigation
//! decision. The service keeps its session in a reactive cell shaped as
//! `state::auth::AuthState`; views only ever read that cell.

pub mod backend;
pub mod clock;
pub mod credential;
pub mod guard;
pub mod role;
pub mod service;
pub mod store;

pub use backend::{AuthBackend, AuthError, Identity, MockAuthBackend};
pub use clock::{Clock, ManualClock, SystemClock};
pub use credential::{CredentialBlob, CredentialError, Session};
pub use guard::{GuardDecision, LOGIN_PATH};
pub use role::Role;
pub use service::{AuthService, SESSION_TTL_SECS};
pub use store::{BrowserStorage, MemoryStorage, SessionStore, StorageBackend, TOKEN_KEY};

/// Auth service wired to browser storage, the wall clock, and the mock backend.
pub type AppAuthService = AuthService<BrowserStorage, SystemClock, MockAuthBackend>;
