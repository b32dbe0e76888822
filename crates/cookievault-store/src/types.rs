//! Consent data model — categories, grants, and the persisted record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::migrate::SCHEMA_VERSION;

/// A named class of data use a user grants or denies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsentCategory {
    /// Required for basic operation; cannot be denied.
    Essential,
    Functional,
    Analytics,
    Advertising,
}

impl ConsentCategory {
    pub fn all() -> &'static [ConsentCategory] {
        &[
            Self::Essential,
            Self::Functional,
            Self::Analytics,
            Self::Advertising,
        ]
    }
}

impl std::fmt::Display for ConsentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Essential => write!(f, "essential"),
            Self::Functional => write!(f, "functional"),
            Self::Analytics => write!(f, "analytics"),
            Self::Advertising => write!(f, "advertising"),
        }
    }
}

/// Per-category consent decisions.
///
/// A denied `essential` is representable but never persisted; `save`
/// rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsentGrants {
    pub essential: bool,
    pub functional: bool,
    pub analytics: bool,
    pub advertising: bool,
}

impl ConsentGrants {
    /// Grant every category.
    pub fn accept_all() -> Self {
        Self {
            essential: true,
            functional: true,
            analytics: true,
            advertising: true,
        }
    }

    /// Grant only the essential category.
    pub fn essential_only() -> Self {
        Self {
            essential: true,
            functional: false,
            analytics: false,
            advertising: false,
        }
    }

    /// Look up the decision for a category.
    pub fn granted(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Essential => self.essential,
            ConsentCategory::Functional => self.functional,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Advertising => self.advertising,
        }
    }
}

/// The persisted consent record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version of the record.
    pub version: u32,
    /// Per-category decisions.
    pub grants: ConsentGrants,
    /// When the preferences were last written.
    pub timestamp: DateTime<Utc>,
}

impl Preferences {
    /// Build a record at the current schema version, stamped now.
    pub fn new(grants: ConsentGrants) -> Self {
        Self {
            version: SCHEMA_VERSION,
            grants,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let all = ConsentGrants::accept_all();
        assert!(ConsentCategory::all().iter().all(|c| all.granted(*c)));

        let minimal = ConsentGrants::essential_only();
        assert!(minimal.granted(ConsentCategory::Essential));
        assert!(!minimal.granted(ConsentCategory::Functional));
        assert!(!minimal.granted(ConsentCategory::Analytics));
        assert!(!minimal.granted(ConsentCategory::Advertising));
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&ConsentCategory::Advertising).unwrap();
        assert_eq!(json, "\"advertising\"");
        assert_eq!(ConsentCategory::Advertising.to_string(), "advertising");
    }

    #[test]
    fn test_new_record_is_current_version() {
        let prefs = Preferences::new(ConsentGrants::essential_only());
        assert_eq!(prefs.version, SCHEMA_VERSION);
    }
}
