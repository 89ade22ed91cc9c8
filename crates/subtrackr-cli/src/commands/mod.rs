use subtrackr_core::{KeyValueStore, LedgerStore};

pub mod backup;
pub mod init;
pub mod misc;
pub mod reports;
pub mod subscriptions;

/// Fail when the ledger's last write did not reach the database.
///
/// The core keeps running after a failed save; a one-shot command has no
/// later mutation to retry with, so it reports the failure instead.
fn ensure_saved<S: KeyValueStore>(ledger: &LedgerStore<S>) -> anyhow::Result<()> {
    if ledger.is_read_only() {
        return Err(anyhow::anyhow!(
            "The ledger database holds entries that could not be read, so it was left unchanged. \
             Restore a backup with `subtrackr import` to replace it."
        ));
    }
    if ledger.has_unsaved_changes() {
        return Err(anyhow::anyhow!(
            "Changes could not be saved to the ledger database"
        ));
    }
    Ok(())
}
