use crate::error::WizardError;
use ohub_domain::client::ClientRecord;
use ohub_domain::constants::{KEY_CLIENT_DATA, KEY_CLIENTS, KEY_SELECTED_CLIENT_ID};
use ohub_kernel::safe_nanoid;
use ohub_storage::Store;
use tracing::{debug, info};

/// Persistence gateway for intake client records.
///
/// The directory owns the three related slots: the `clients` list, the
/// selected-client pointer, and the legacy `clientData` single-record
/// fallback kept in sync for sessions predating the list. Reads are
/// tolerant — an absent or unparsable slot yields an empty directory.
#[derive(Debug, Clone)]
pub struct ClientDirectory {
    store: Store,
}

impl ClientDirectory {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }

    /// Loads the full client list; absent or corrupt state reads as empty.
    ///
    /// # Errors
    /// Returns [`WizardError::Store`] on a backend I/O failure.
    pub fn clients(&self) -> Result<Vec<ClientRecord>, WizardError> {
        Ok(self.store.get(KEY_CLIENTS)?.unwrap_or_default())
    }

    /// Resolves the currently selected client.
    ///
    /// Falls back to the single `clientData` record when the pointer is
    /// missing or dangling.
    ///
    /// # Errors
    /// Returns [`WizardError::Store`] on a backend I/O failure.
    pub fn selected(&self) -> Result<Option<ClientRecord>, WizardError> {
        if let Some(id) = self.store.get::<String>(KEY_SELECTED_CLIENT_ID)? {
            let clients = self.clients()?;
            if let Some(found) = clients.into_iter().find(|c| c.id == id) {
                return Ok(Some(found));
            }
        }

        Ok(self.store.get(KEY_CLIENT_DATA)?)
    }

    /// Points the dashboard at `id`. Returns whether the client exists.
    ///
    /// # Errors
    /// Returns [`WizardError::Store`] on a backend I/O failure.
    pub fn select(&self, id: &str) -> Result<bool, WizardError> {
        let known = self.clients()?.iter().any(|c| c.id == id);
        if known {
            self.store.put(KEY_SELECTED_CLIENT_ID, id)?;
        }
        Ok(known)
    }

    /// Upserts `record` into the client list and selects it.
    ///
    /// A record without an id gets one assigned. The `clientData` fallback
    /// mirror is rewritten on every save; last writer wins across all slots.
    ///
    /// # Errors
    /// Returns [`WizardError::Store`] on a backend I/O failure.
    pub fn save(&self, mut record: ClientRecord) -> Result<ClientRecord, WizardError> {
        if record.id.is_empty() {
            record.id = safe_nanoid!();
            debug!(id = %record.id, "Assigned id to new client record");
        }

        let mut clients = self.clients()?;
        match clients.iter_mut().find(|c| c.id == record.id) {
            Some(slot) => *slot = record.clone(),
            None => clients.push(record.clone()),
        }

        self.store.put(KEY_CLIENTS, &clients)?;
        self.store.put(KEY_SELECTED_CLIENT_ID, &record.id)?;
        self.store.put(KEY_CLIENT_DATA, &record)?;

        info!(id = %record.id, clients = clients.len(), "Client record saved");
        Ok(record)
    }

    /// Removes a client by id. Returns whether anything was removed.
    ///
    /// # Errors
    /// Returns [`WizardError::Store`] on a backend I/O failure.
    pub fn remove(&self, id: &str) -> Result<bool, WizardError> {
        let mut clients = self.clients()?;
        let before = clients.len();
        clients.retain(|c| c.id != id);

        if clients.len() == before {
            return Ok(false);
        }

        self.store.put(KEY_CLIENTS, &clients)?;
        if self.store.get::<String>(KEY_SELECTED_CLIENT_ID)?.as_deref() == Some(id) {
            self.store.remove(KEY_SELECTED_CLIENT_ID)?;
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> ClientDirectory {
        ClientDirectory::new(Store::in_memory())
    }

    fn named(full_name: &str) -> ClientRecord {
        let mut record = ClientRecord::default();
        record.personal.full_name = full_name.to_owned();
        record
    }

    #[test]
    fn empty_store_reads_as_empty_directory() {
        let dir = directory();
        assert!(dir.clients().unwrap().is_empty());
        assert!(dir.selected().unwrap().is_none());
    }

    #[test]
    fn save_assigns_id_and_selects() {
        let dir = directory();
        let saved = dir.save(named("Sara")).unwrap();

        assert_eq!(saved.id.len(), 12);
        let selected = dir.selected().unwrap().expect("saved client selected");
        assert_eq!(selected.personal.full_name, "Sara");
    }

    #[test]
    fn save_with_existing_id_replaces_in_place() {
        let dir = directory();
        let first = dir.save(named("Sara")).unwrap();
        dir.save(named("Omar")).unwrap();

        let mut updated = named("Sara M.");
        updated.id = first.id.clone();
        dir.save(updated).unwrap();

        let clients = dir.clients().unwrap();
        assert_eq!(clients.len(), 2);
        assert_eq!(clients[0].personal.full_name, "Sara M.");
    }

    #[test]
    fn dangling_selection_falls_back_to_client_data() {
        let dir = directory();
        dir.save(named("Sara")).unwrap();

        // Clients list lost, pointer dangling; the fallback mirror remains.
        dir.store.remove(KEY_CLIENTS).unwrap();
        let fallback = dir.selected().unwrap().expect("clientData fallback");
        assert_eq!(fallback.personal.full_name, "Sara");
    }

    #[test]
    fn select_rejects_unknown_ids() {
        let dir = directory();
        let saved = dir.save(named("Sara")).unwrap();

        assert!(dir.select(&saved.id).unwrap());
        assert!(!dir.select("missing").unwrap());
    }

    #[test]
    fn remove_clears_the_selection_pointer() {
        let dir = directory();
        let saved = dir.save(named("Sara")).unwrap();

        assert!(dir.remove(&saved.id).unwrap());
        assert!(!dir.remove(&saved.id).unwrap());
        assert!(dir.clients().unwrap().is_empty());
        assert!(
            dir.store.get::<String>(KEY_SELECTED_CLIENT_ID).unwrap().is_none(),
            "selection pointer should be cleared"
        );
    }
}
