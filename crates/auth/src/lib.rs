//! `medtrack-auth` — roles, capabilities, and the demo session boundary.
//!
//! Authentication here is a fixture lookup, not a security system; what this
//! crate does enforce is that role-to-capability mapping is a total function
//! over enumerated types (checked exhaustively at compile time) and that the
//! session is an explicit object passed to whoever needs it, never a hidden
//! singleton.

pub mod role;
pub mod session;
pub mod user;

pub use role::{Capability, Role, capabilities_for};
pub use session::{Session, login};
pub use user::User;
