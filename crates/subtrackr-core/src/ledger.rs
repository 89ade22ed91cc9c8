//! The subscription ledger.
//!
//! [`LedgerStore`] owns the ordered list of subscriptions and is the only
//! thing that mutates it. It is built by loading from a [`KeyValueStore`],
//! so a save can never run before the initial load has happened, and every
//! mutation afterwards writes the full snapshot back.
//!
//! A saved snapshot with entries that cannot be read at all puts the ledger
//! in read-only mode: saving would drop those entries, so every save is
//! refused until an import replaces the ledger.

use chrono::NaiveDate;

use crate::backup::{export_ledger, import_ledger, load_snapshot};
use crate::error::{LedgerError, Result};
use crate::ids::IdGenerator;
use crate::renewals::{self, DueLabel};
use crate::storage::{
    KeyValueStore, Subscription, SubscriptionId, SubscriptionInput, SUBSCRIPTIONS_KEY,
};
use crate::totals::{self, Money, Totals};

/// Ledger of subscriptions persisted through a key-value store.
pub struct LedgerStore<S: KeyValueStore> {
    store: S,
    subscriptions: Vec<Subscription>,
    ids: IdGenerator,
    unsaved: bool,
    read_only: bool,
}

impl<S: KeyValueStore> LedgerStore<S> {
    /// Load the ledger from `store`.
    ///
    /// A missing, unreadable or unparseable snapshot is treated as an empty
    /// ledger; the problem is logged and loading carries on. Records in the
    /// snapshot that lack an id are given one, and the snapshot is saved
    /// right away so those ids stay put.
    pub fn open(store: S) -> Self {
        let mut ids = IdGenerator::new();
        let mut assigned_ids = 0;
        let mut read_only = false;
        let subscriptions = match store.get(SUBSCRIPTIONS_KEY) {
            Ok(Some(raw)) => match load_snapshot(raw.as_bytes(), &mut ids) {
                Ok(snapshot) => {
                    if snapshot.unreadable > 0 {
                        tracing::warn!(
                            unreadable = snapshot.unreadable,
                            "stored subscriptions include unreadable entries; saving is disabled"
                        );
                        read_only = true;
                    }
                    assigned_ids = snapshot.assigned_ids;
                    snapshot.subscriptions
                }
                Err(err) => {
                    tracing::warn!(error = %err, "stored subscriptions are unreadable; starting empty");
                    ids = IdGenerator::new();
                    Vec::new()
                }
            },
            Ok(None) => {
                tracing::info!("no saved subscriptions yet");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to load subscriptions; starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = subscriptions.len(), "ledger loaded");

        let mut ledger = Self {
            store,
            subscriptions,
            ids,
            unsaved: false,
            read_only,
        };
        if assigned_ids > 0 && !ledger.read_only {
            tracing::debug!(count = assigned_ids, "saving ids given to stored records");
            ledger.persist();
        }
        ledger
    }

    /// All subscriptions, in the order they were added.
    pub fn all(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn get(&self, id: &SubscriptionId) -> Option<&Subscription> {
        self.subscriptions.iter().find(|sub| &sub.id == id)
    }

    /// Whether the most recent save failed. The next mutation retries with
    /// the full current state.
    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    /// Whether saving is disabled because the stored snapshot had entries
    /// that could not be read. A successful import lifts it.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Add a subscription at the end of the ledger.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Validation` if `name`, `cost` or `nextBilling`
    /// is blank. The ledger is not touched in that case.
    pub fn add(&mut self, input: SubscriptionInput) -> Result<Subscription> {
        if let Some(field) = input.missing_field() {
            return Err(LedgerError::Validation(format!("{} is required", field)));
        }
        let subscription = input.into_subscription(self.ids.next_id());
        self.subscriptions.push(subscription.clone());
        tracing::debug!(id = %subscription.id, "added subscription");
        self.persist();
        Ok(subscription)
    }

    /// Remove the subscription with `id`, if there is one.
    ///
    /// A loaded snapshot may hold several records with the same id; all of
    /// them go, and the first is returned.
    pub fn remove(&mut self, id: &SubscriptionId) -> Option<Subscription> {
        let index = self.subscriptions.iter().position(|sub| &sub.id == id)?;
        let removed = self.subscriptions.remove(index);
        self.subscriptions.retain(|sub| &sub.id != id);
        tracing::debug!(id = %removed.id, "removed subscription");
        self.persist();
        Some(removed)
    }

    /// Backup bytes for the whole ledger.
    pub fn export(&self) -> Result<Vec<u8>> {
        export_ledger(&self.subscriptions)
    }

    /// Replace the whole ledger with the contents of a backup.
    ///
    /// Returns the number of imported records.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidBackup` if the backup is rejected; the
    /// ledger is left exactly as it was.
    pub fn import(&mut self, bytes: &[u8]) -> Result<usize> {
        let mut ids = self.ids.clone();
        let imported = import_ledger(bytes, &mut ids)?;
        let count = imported.len();
        self.subscriptions = imported;
        self.ids = ids;
        self.read_only = false;
        tracing::info!(count, "imported backup");
        self.persist();
        Ok(count)
    }

    pub fn monthly_total(&self) -> Money {
        totals::monthly_total(&self.subscriptions)
    }

    pub fn yearly_total(&self) -> Money {
        totals::yearly_total(&self.subscriptions)
    }

    pub fn totals(&self) -> Totals {
        Totals::of(&self.subscriptions)
    }

    pub fn annual_equivalent(&self, subscription: &Subscription) -> Money {
        totals::annual_equivalent(subscription)
    }

    /// Subscriptions renewing within `horizon_days` of `today`, soonest first.
    pub fn upcoming_renewals(&self, today: NaiveDate, horizon_days: u32) -> Vec<&Subscription> {
        renewals::upcoming_renewals(&self.subscriptions, today, horizon_days)
    }

    pub fn due_label(&self, next_billing: Option<&str>, today: NaiveDate) -> Option<DueLabel> {
        renewals::due_label(next_billing, today)
    }

    /// Give back the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) {
        if self.read_only {
            tracing::error!("refusing to overwrite stored subscriptions that could not be read");
            self.unsaved = true;
            return;
        }
        let snapshot = match serde_json::to_string(&self.subscriptions) {
            Ok(snapshot) => snapshot,
            Err(err) => {
                tracing::error!(error = %err, "failed to encode subscriptions");
                self.unsaved = true;
                return;
            }
        };
        match self.store.set(SUBSCRIPTIONS_KEY, &snapshot) {
            Ok(()) => self.unsaved = false,
            Err(err) => {
                tracing::error!(error = %err, "failed to save subscriptions");
                self.unsaved = true;
            }
        }
    }
}
