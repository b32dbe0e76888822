//! CookieVault Store — versioned consent record with atomic-replace persistence.

pub mod migrate;
pub mod store;
pub mod types;

pub use migrate::SCHEMA_VERSION;
pub use store::PreferenceStore;
pub use types::{ConsentCategory, ConsentGrants, Preferences};
