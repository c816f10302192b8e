//! Flat record types persisted one-per-line in the CSV store.
//!
//! Every record knows its fixed column count and how to convert itself to and from a row of
//! string fields. Decoding never panics: arity and field problems come back as [`RecordError`]
//! so the store can skip the offending line.

pub mod application;
pub mod personal;
pub mod property;
pub mod tenant;
pub mod wishlist;

use chrono::NaiveDateTime;
use std::str::FromStr;

pub use application::{Application, ApplicationStatus};
pub use personal::PersonalInfo;
pub use property::{Property, PropertyId, PropertyType};
pub use tenant::{Gender, Tenant};
pub use wishlist::WishlistEntry;

/// Persisted timestamp layout, e.g. `05/03/2024 14:30`.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Conversion between a record and its fixed-order CSV fields.
pub trait CsvRecord: Sized {
    /// Human readable record name used in log lines and errors.
    const KIND: &'static str;
    /// Exact number of fields in a row.
    const ARITY: usize;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError>;
    fn to_fields(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("{record} row has {found} fields, expected {expected}")]
    Arity {
        record: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{record} field `{field}` has invalid value '{value}': {reason}")]
    InvalidField {
        record: &'static str,
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl RecordError {
    pub(crate) fn invalid(
        record: &'static str,
        field: &'static str,
        value: &str,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidField {
            record,
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub(crate) fn check_arity<T: CsvRecord>(fields: &[&str]) -> Result<(), RecordError> {
    if fields.len() == T::ARITY {
        Ok(())
    } else {
        Err(RecordError::Arity {
            record: T::KIND,
            expected: T::ARITY,
            found: fields.len(),
        })
    }
}

pub(crate) fn parse_field<V>(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<V, RecordError>
where
    V: FromStr,
    V::Err: ToString,
{
    value
        .parse::<V>()
        .map_err(|err| RecordError::invalid(record, field, value, err))
}

pub(crate) fn parse_timestamp(
    record: &'static str,
    field: &'static str,
    value: &str,
) -> Result<NaiveDateTime, RecordError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map_err(|err| RecordError::invalid(record, field, value, err))
}

pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Anything other than a case-insensitive `true` reads as false.
pub(crate) fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Floats always carry a decimal point on disk (`1200.0`, not `1200`).
pub(crate) fn format_float(value: f32) -> String {
    format!("{value:?}")
}
