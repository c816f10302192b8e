use chrono::NaiveDateTime;
use std::str::FromStr;

use super::personal::{decode_personal, encode_personal};
use super::{
    check_arity, format_float, format_timestamp, parse_field, parse_timestamp, CsvRecord,
    PersonalInfo, PropertyId, RecordError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationStatus {
    Submitted,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "SUBMITTED" => Ok(Self::Submitted),
            "APPROVED" => Ok(Self::Approved),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err("expected SUBMITTED, APPROVED or REJECTED".to_string()),
        }
    }
}

/// A rental application lodged by a tenant for one property.
#[derive(Debug, Clone, PartialEq)]
pub struct Application {
    pub applicant: PersonalInfo,
    pub saving: f32,
    pub property_id: PropertyId,
    pub date_submitted: NaiveDateTime,
    pub status: ApplicationStatus,
}

impl CsvRecord for Application {
    const KIND: &'static str = "Application";
    const ARITY: usize = 8;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        check_arity::<Self>(fields)?;
        let applicant = decode_personal(Self::KIND, fields)?;

        Ok(Self {
            applicant,
            saving: parse_field(Self::KIND, "saving", fields[4])?,
            property_id: parse_field(Self::KIND, "propertyID", fields[5])?,
            date_submitted: parse_timestamp(Self::KIND, "dateSubmitted", fields[6])?,
            status: parse_field(Self::KIND, "applicationStatus", fields[7])?,
        })
    }

    fn to_fields(&self) -> Vec<String> {
        let mut fields = encode_personal(&self.applicant);
        fields.extend([
            format_float(self.saving),
            self.property_id.to_string(),
            format_timestamp(&self.date_submitted),
            self.status.code().to_string(),
        ]);
        fields
    }
}
