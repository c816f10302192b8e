use crate::records::{Property, PropertyId, Tenant};
use crate::store::{CsvStore, RecordSet, StoreError};

/// Owns the loaded records, where they persist, and who is logged in.
#[derive(Debug)]
pub struct RentalSession {
    store: CsvStore,
    pub(crate) records: RecordSet,
    current_tenant: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("no tenant is logged in")]
    NotLoggedIn,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RentalSession {
    /// Loads all collections from `store` and starts logged out.
    pub fn open(store: CsvStore) -> Self {
        let records = RecordSet::load(&store);
        Self::new(store, records)
    }

    pub fn new(store: CsvStore, records: RecordSet) -> Self {
        Self {
            store,
            records,
            current_tenant: None,
        }
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Exact, case-sensitive match on email and password. The first matching tenant wins.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let found = self
            .records
            .tenants
            .iter()
            .position(|tenant| tenant.email() == email && tenant.password == password);

        match found {
            Some(index) => {
                tracing::info!(%email, "tenant logged in");
                self.current_tenant = Some(index);
                true
            }
            None => {
                tracing::info!(%email, "login rejected");
                false
            }
        }
    }

    pub fn logout(&mut self) {
        if let Some(tenant) = self.current_tenant() {
            tracing::info!(email = %tenant.email(), "tenant logged out");
        }
        self.current_tenant = None;
    }

    pub fn current_tenant(&self) -> Option<&Tenant> {
        self.current_tenant
            .and_then(|index| self.records.tenants.get(index))
    }

    pub(crate) fn require_tenant(&self) -> Result<&Tenant, SessionError> {
        self.current_tenant().ok_or(SessionError::NotLoggedIn)
    }

    pub fn properties(&self) -> &[Property] {
        &self.records.properties
    }

    pub fn property(&self, id: PropertyId) -> Option<&Property> {
        self.records.properties.iter().find(|property| property.id == id)
    }

    /// Rewrites every collection to disk.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.records.flush(&self.store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{Gender, PersonalInfo};

    fn tenant(email: &str, password: &str) -> Tenant {
        Tenant {
            info: PersonalInfo {
                first_name: "Alex".to_string(),
                last_name: "Ng".to_string(),
                email: email.to_string(),
                phone_no: "0412345678".to_string(),
            },
            password: password.to_string(),
            gender: Gender::Other,
            preferred_price: 400.0,
            preferred_suburb: "Clayton".to_string(),
        }
    }

    fn session() -> RentalSession {
        let records = RecordSet {
            tenants: vec![
                tenant("a@student.monash.edu", "pw1"),
                tenant("b@student.monash.edu", "pw2"),
            ],
            ..RecordSet::default()
        };
        RentalSession::new(CsvStore::new("unused"), records)
    }

    #[test]
    fn login_with_matching_credentials_sets_current_tenant() {
        let mut session = session();
        assert!(session.login("a@student.monash.edu", "pw1"));
        assert_eq!(
            session.current_tenant().map(Tenant::email),
            Some("a@student.monash.edu")
        );
    }

    #[test]
    fn login_with_wrong_password_leaves_session_logged_out() {
        let mut session = session();
        assert!(!session.login("a@student.monash.edu", "wrong"));
        assert!(session.current_tenant().is_none());
    }

    #[test]
    fn login_is_case_sensitive() {
        let mut session = session();
        assert!(!session.login("A@student.monash.edu", "pw1"));
        assert!(!session.login("a@student.monash.edu", "PW1"));
    }

    #[test]
    fn logout_clears_current_tenant() {
        let mut session = session();
        session.login("b@student.monash.edu", "pw2");
        session.logout();
        assert!(session.current_tenant().is_none());
        session.logout();
        assert!(session.current_tenant().is_none());
    }
}
