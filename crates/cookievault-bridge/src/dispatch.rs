//! Method-call dispatch onto the preference store.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use cookievault_core::Error;
use cookievault_store::{ConsentGrants, PreferenceStore, Preferences};

use crate::method::Method;

/// Outcome of a dispatched method call, shaped like a platform-channel
/// reply: a success value, a coded error, or the not-implemented
/// sentinel for methods outside the consent channel.
#[derive(Debug, Clone, PartialEq)]
pub enum BridgeResponse {
    /// Successful call. `Value::Null` encodes an absent record on read
    /// and a completed write on save.
    Success(Value),
    /// Failed call with a stable error code for the host's error
    /// reporting convention.
    Error { code: &'static str, message: String },
    /// The method name is not part of the consent channel.
    NotImplemented,
}

/// Payload of a `saveCookiePreferences` call.
#[derive(Debug, Deserialize)]
struct SaveRequest {
    grants: ConsentGrants,
}

/// Translates platform method calls into typed store operations.
pub struct ConsentBridge {
    store: Arc<PreferenceStore>,
}

impl ConsentBridge {
    pub fn new(store: Arc<PreferenceStore>) -> Self {
        Self { store }
    }

    /// Handle one method call from the platform channel.
    pub fn handle(&self, method: &str, payload: Option<&Value>) -> BridgeResponse {
        let Some(method) = Method::parse(method) else {
            debug!("Unknown consent channel method: {}", method);
            return BridgeResponse::NotImplemented;
        };

        match method {
            Method::GetCookiePreferences => self.get_preferences(),
            Method::SaveCookiePreferences => self.save_preferences(payload),
        }
    }

    fn get_preferences(&self) -> BridgeResponse {
        match self.store.load() {
            Some(prefs) => match serde_json::to_value(&prefs) {
                Ok(value) => BridgeResponse::Success(value),
                Err(e) => BridgeResponse::Error {
                    code: "internal",
                    message: e.to_string(),
                },
            },
            None => BridgeResponse::Success(Value::Null),
        }
    }

    fn save_preferences(&self, payload: Option<&Value>) -> BridgeResponse {
        let Some(payload) = payload else {
            return BridgeResponse::Error {
                code: "bad_request",
                message: "saveCookiePreferences requires a payload".into(),
            };
        };

        let request: SaveRequest = match serde_json::from_value(payload.clone()) {
            Ok(request) => request,
            Err(e) => {
                return BridgeResponse::Error {
                    code: "bad_request",
                    message: e.to_string(),
                }
            }
        };

        match self.store.save(&Preferences::new(request.grants)) {
            Ok(()) => BridgeResponse::Success(Value::Null),
            Err(e) => Self::store_error(e),
        }
    }

    fn store_error(e: Error) -> BridgeResponse {
        let code = match e {
            Error::InvalidInput(_) => "invalid_input",
            Error::WriteFailure(_) => "write_failure",
            Error::CorruptRecord(_) => "internal",
        };
        BridgeResponse::Error {
            code,
            message: e.to_string(),
        }
    }
}
