use super::{CsvStore, StoreError};
use crate::records::{Application, Property, Tenant, WishlistEntry};

/// The four in-memory collections, loaded together at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub tenants: Vec<Tenant>,
    pub properties: Vec<Property>,
    pub applications: Vec<Application>,
    pub wishlist: Vec<WishlistEntry>,
}

impl RecordSet {
    pub fn load(store: &CsvStore) -> Self {
        let records = Self {
            tenants: store.load(),
            properties: store.load(),
            applications: store.load(),
            wishlist: store.load(),
        };

        tracing::info!(
            data_dir = %store.data_dir().display(),
            tenants = records.tenants.len(),
            properties = records.properties.len(),
            applications = records.applications.len(),
            wishlist = records.wishlist.len(),
            "records loaded"
        );
        records
    }

    /// Rewrites every file. All four writes are attempted; the first failure is returned.
    pub fn flush(&self, store: &CsvStore) -> Result<(), StoreError> {
        let outcomes = [
            store.save(&self.tenants),
            store.save(&self.properties),
            store.save(&self.applications),
            store.save(&self.wishlist),
        ];
        outcomes.into_iter().collect()
    }
}
