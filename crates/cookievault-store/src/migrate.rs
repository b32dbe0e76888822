//! Schema versioning and forward migration of persisted records.
//!
//! Records are migrated as raw JSON so that old shapes never need live
//! Rust types. The migration list is fixed and ordered; each entry
//! upgrades a record by exactly one version. Versions below the oldest
//! known migration, or above the current version, are rejected and the
//! store treats the record as absent.

use serde_json::Value;
use tracing::debug;

use cookievault_core::{Error, Result};

/// Schema version written by the current store.
pub const SCHEMA_VERSION: u32 = 2;

/// Oldest version with a known migration path.
pub const MIN_SUPPORTED_VERSION: u32 = 1;

/// Ordered version→version+1 transforms.
const MIGRATIONS: &[(u32, fn(Value) -> Result<Value>)] = &[(1, v1_to_v2)];

/// Upgrade a raw record to the current schema version.
pub fn upgrade(record: Value) -> Result<Value> {
    let mut record = record;
    let mut version = record_version(&record)?;

    if version < MIN_SUPPORTED_VERSION {
        return Err(Error::CorruptRecord(format!(
            "version {} predates the oldest known migration",
            version
        )));
    }
    if version > SCHEMA_VERSION {
        return Err(Error::CorruptRecord(format!(
            "version {} is newer than supported version {}",
            version, SCHEMA_VERSION
        )));
    }

    while version < SCHEMA_VERSION {
        let (_, migration) = MIGRATIONS
            .iter()
            .find(|(from, _)| *from == version)
            .ok_or_else(|| {
                Error::CorruptRecord(format!("no migration from version {}", version))
            })?;
        record = migration(record)?;
        version += 1;
        debug!("Migrated consent record to version {}", version);
    }

    Ok(record)
}

fn record_version(record: &Value) -> Result<u32> {
    record
        .get("version")
        .and_then(Value::as_u64)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| Error::CorruptRecord("missing or non-integer version".into()))
}

/// v1 grant keys used the original banner vocabulary; v2 renamed them.
fn v1_to_v2(mut record: Value) -> Result<Value> {
    const RENAMES: &[(&str, &str)] = &[
        ("necessary", "essential"),
        ("preferences", "functional"),
        ("statistics", "analytics"),
        ("marketing", "advertising"),
    ];

    let obj = record
        .as_object_mut()
        .ok_or_else(|| Error::CorruptRecord("record is not an object".into()))?;

    let grants = obj
        .get_mut("grants")
        .and_then(Value::as_object_mut)
        .ok_or_else(|| Error::CorruptRecord("v1 record has no grants object".into()))?;

    for (old, new) in RENAMES {
        let value = grants.remove(*old).ok_or_else(|| {
            Error::CorruptRecord(format!("v1 record missing grant '{}'", old))
        })?;
        grants.insert((*new).to_string(), value);
    }

    obj.insert("version".to_string(), Value::from(2u32));
    Ok(record)
}
