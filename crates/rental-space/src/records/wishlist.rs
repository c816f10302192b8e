use chrono::NaiveDateTime;

use super::{
    check_arity, format_timestamp, parse_field, parse_timestamp, CsvRecord, PropertyId,
    RecordError,
};

/// One saved property for one tenant. (property_id, tenant_email) is unique per collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WishlistEntry {
    pub property_id: PropertyId,
    pub tenant_email: String,
    pub date_added: NaiveDateTime,
}

impl WishlistEntry {
    pub fn matches(&self, property_id: PropertyId, tenant_email: &str) -> bool {
        self.property_id == property_id && self.tenant_email == tenant_email
    }
}

impl CsvRecord for WishlistEntry {
    const KIND: &'static str = "Wishlist";
    const ARITY: usize = 3;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        check_arity::<Self>(fields)?;

        Ok(Self {
            property_id: parse_field(Self::KIND, "propertyID", fields[0])?,
            tenant_email: fields[1].to_string(),
            date_added: parse_timestamp(Self::KIND, "dateAdded", fields[2])?,
        })
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.property_id.to_string(),
            self.tenant_email.clone(),
            format_timestamp(&self.date_added),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wishlist_row_round_trips() {
        let row = ["3", "a@student.monash.edu", "01/05/2024 18:45"];
        let entry = WishlistEntry::from_fields(&row).expect("valid entry");
        assert!(entry.matches(PropertyId(3), "a@student.monash.edu"));
        assert!(!entry.matches(PropertyId(3), "b@student.monash.edu"));
        assert_eq!(entry.to_fields(), row.map(String::from).to_vec());
    }

    #[test]
    fn extra_fields_are_rejected() {
        let row = ["3", "a@student.monash.edu", "01/05/2024 18:45", "extra"];
        assert!(matches!(
            WishlistEntry::from_fields(&row),
            Err(RecordError::Arity { found: 4, .. })
        ));
    }
}
