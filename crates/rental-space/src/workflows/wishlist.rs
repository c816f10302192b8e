use chrono::{Local, NaiveDateTime};

use super::session::{RentalSession, SessionError};
use crate::records::{Property, PropertyId, WishlistEntry};

/// Result of flipping a property's wishlist membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistToggle {
    Added,
    Removed,
}

/// Removes the (property, tenant) entry if present, otherwise appends one stamped `now`.
pub fn toggle(
    entries: &mut Vec<WishlistEntry>,
    property_id: PropertyId,
    tenant_email: &str,
    now: NaiveDateTime,
) -> WishlistToggle {
    match entries
        .iter()
        .position(|entry| entry.matches(property_id, tenant_email))
    {
        Some(index) => {
            entries.remove(index);
            WishlistToggle::Removed
        }
        None => {
            entries.push(WishlistEntry {
                property_id,
                tenant_email: tenant_email.to_string(),
                date_added: now,
            });
            WishlistToggle::Added
        }
    }
}

impl RentalSession {
    /// Toggles `property_id` on the current tenant's wishlist and flushes every collection.
    ///
    /// The in-memory change stays in place even when the flush fails.
    pub fn toggle_wishlist(
        &mut self,
        property_id: PropertyId,
    ) -> Result<WishlistToggle, SessionError> {
        let email = self.require_tenant()?.email().to_string();
        let outcome = toggle(
            &mut self.records.wishlist,
            property_id,
            &email,
            Local::now().naive_local(),
        );
        tracing::info!(%email, %property_id, ?outcome, "wishlist toggled");

        self.flush()?;
        Ok(outcome)
    }

    pub fn wishlist_entry(&self, property_id: PropertyId) -> Option<&WishlistEntry> {
        let email = self.current_tenant()?.email();
        self.records
            .wishlist
            .iter()
            .find(|entry| entry.matches(property_id, email))
    }

    pub fn is_wishlisted(&self, property_id: PropertyId) -> bool {
        self.wishlist_entry(property_id).is_some()
    }

    /// The current tenant's saved properties in the order they were added.
    ///
    /// Entries pointing at a property that no longer exists are skipped.
    pub fn wishlist_properties(&self) -> Vec<Property> {
        let Some(tenant) = self.current_tenant() else {
            return Vec::new();
        };

        self.records
            .wishlist
            .iter()
            .filter(|entry| entry.tenant_email == tenant.email())
            .filter_map(|entry| self.property(entry.property_id).cloned())
            .collect()
    }
}
