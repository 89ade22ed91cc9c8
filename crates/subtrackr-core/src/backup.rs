//! Backup export and import.
//!
//! A backup is a UTF-8 JSON array of subscription objects. Export writes the
//! ledger as-is; import validates the whole payload before anything is
//! returned, so a rejected file never leaves a half-applied ledger behind.
//!
//! The ledger's own saved snapshot is read with [`load_snapshot`], which keeps
//! whatever it can instead of rejecting the whole value.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::{LedgerError, Result};
use crate::ids::IdGenerator;
use crate::storage::{Subscription, SubscriptionId};

/// Application name used for backup file names.
pub const APP_NAME: &str = "SubTrackr";

/// Default file name for an exported backup.
pub fn default_backup_filename() -> String {
    format!("{}-backup.json", APP_NAME.to_lowercase())
}

/// Serialize the ledger to backup bytes (pretty-printed JSON).
pub fn export_ledger(ledger: &[Subscription]) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(ledger)
        .map_err(|e| LedgerError::Storage(format!("Failed to encode backup: {}", e)))?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Parse backup bytes into a ledger.
///
/// Elements without an `id` (or with `id: null`) get a fresh one from
/// `ids`, so generated ids avoid everything `ids` already holds as well as
/// every id present in the file. Ids in the file may repeat ids held by
/// `ids`; an import replaces the ledger those came from.
///
/// # Errors
///
/// Returns `LedgerError::InvalidBackup` if:
/// - the bytes are not UTF-8 JSON
/// - the top-level value is not an array
/// - an element is not an object, or a field has an unusable type
/// - two elements share an id
pub fn import_ledger(bytes: &[u8], ids: &mut IdGenerator) -> Result<Vec<Subscription>> {
    let elements = parse_array(bytes)?;

    // Reserve every explicit id first so generated ids cannot take one that
    // appears later in the file.
    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(elements.len());
    for (index, element) in elements.into_iter().enumerate() {
        let Value::Object(fields) = element else {
            return Err(LedgerError::InvalidBackup(format!(
                "Record {} is not an object",
                index + 1
            )));
        };
        if let Some(raw_id) = fields.get("id").filter(|v| !v.is_null()) {
            let id: SubscriptionId = serde_json::from_value(raw_id.clone()).map_err(|_| {
                LedgerError::InvalidBackup(format!(
                    "Record {} has an id that is neither a number nor a string",
                    index + 1
                ))
            })?;
            if !seen.insert(id.clone()) {
                return Err(LedgerError::InvalidBackup(format!(
                    "Record {} repeats id {}",
                    index + 1,
                    id
                )));
            }
            ids.reserve(id);
        }
        records.push(fields);
    }

    records
        .into_iter()
        .enumerate()
        .map(|(index, mut fields)| {
            if assign_missing_id(&mut fields, ids) {
                tracing::debug!(record = index + 1, "assigned id to imported record");
            }
            Subscription::try_from(fields)
                .map_err(|e| LedgerError::InvalidBackup(format!("Record {}: {}", index + 1, e)))
        })
        .collect()
}

/// A saved ledger as read back by [`load_snapshot`].
#[derive(Debug, Default)]
pub struct Snapshot {
    pub subscriptions: Vec<Subscription>,
    /// Records that were saved without an id and were given one now
    pub assigned_ids: usize,
    /// Elements that could not be read as a record at all
    pub unreadable: usize,
}

/// Read the ledger's saved snapshot.
///
/// Unlike [`import_ledger`] this never throws records away over problems it
/// can live with. Repeated ids are kept. Fields of the wrong type are carried
/// along untouched (see [`Subscription::from_stored`]). Elements that are not
/// objects, or whose id is neither a number nor a string, are counted in
/// [`Snapshot::unreadable`] and left out.
///
/// # Errors
///
/// Returns `LedgerError::InvalidBackup` if the bytes are not a UTF-8 JSON
/// array.
pub fn load_snapshot(bytes: &[u8], ids: &mut IdGenerator) -> Result<Snapshot> {
    let elements = parse_array(bytes)?;
    let mut snapshot = Snapshot::default();

    let mut records = Vec::with_capacity(elements.len());
    for element in elements {
        let Value::Object(fields) = element else {
            snapshot.unreadable += 1;
            continue;
        };
        if let Some(raw_id) = fields.get("id").filter(|v| !v.is_null()) {
            match serde_json::from_value::<SubscriptionId>(raw_id.clone()) {
                Ok(id) => {
                    ids.reserve(id);
                }
                Err(_) => {
                    snapshot.unreadable += 1;
                    continue;
                }
            }
        }
        records.push(fields);
    }

    for mut fields in records {
        if assign_missing_id(&mut fields, ids) {
            snapshot.assigned_ids += 1;
        }
        match Subscription::from_stored(fields) {
            Ok(sub) => snapshot.subscriptions.push(sub),
            Err(err) => {
                tracing::warn!(error = %err, "skipping unreadable saved record");
                snapshot.unreadable += 1;
            }
        }
    }
    Ok(snapshot)
}

fn parse_array(bytes: &[u8]) -> Result<Vec<Value>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| LedgerError::InvalidBackup("Backup is not valid UTF-8".to_string()))?;
    let parsed: Value = serde_json::from_str(text)
        .map_err(|e| LedgerError::InvalidBackup(format!("Backup is not valid JSON: {}", e)))?;
    match parsed {
        Value::Array(elements) => Ok(elements),
        _ => Err(LedgerError::InvalidBackup(
            "Backup must be an array".to_string(),
        )),
    }
}

/// Give `fields` a fresh id when it has none. Returns whether it did.
fn assign_missing_id(fields: &mut Map<String, Value>, ids: &mut IdGenerator) -> bool {
    if !fields.get("id").map_or(true, Value::is_null) {
        return false;
    }
    let id = ids.next_id();
    fields.insert("id".to_string(), Value::String(id.to_string()));
    true
}
