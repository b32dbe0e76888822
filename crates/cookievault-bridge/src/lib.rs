//! CookieVault Bridge — typed dispatch for the platform consent channel.
//!
//! The host platform delivers string-keyed method calls; this crate is
//! the single place those strings are interpreted. Everything past
//! [`ConsentBridge::handle`] is typed.

pub mod dispatch;
pub mod method;

pub use dispatch::{BridgeResponse, ConsentBridge};
pub use method::Method;
