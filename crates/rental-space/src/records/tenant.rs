use std::fmt;
use std::str::FromStr;

use super::personal::{decode_personal, encode_personal};
use super::{check_arity, format_float, parse_field, CsvRecord, PersonalInfo, RecordError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Other => "OTHER",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "MALE" => Ok(Self::Male),
            "FEMALE" => Ok(Self::Female),
            "OTHER" => Ok(Self::Other),
            _ => Err("expected MALE, FEMALE or OTHER".to_string()),
        }
    }
}

/// A registered tenant. The email inside `info` identifies the tenant.
#[derive(Debug, Clone, PartialEq)]
pub struct Tenant {
    pub info: PersonalInfo,
    pub password: String,
    pub gender: Gender,
    pub preferred_price: f32,
    pub preferred_suburb: String,
}

impl Tenant {
    pub fn email(&self) -> &str {
        &self.info.email
    }
}

impl CsvRecord for Tenant {
    const KIND: &'static str = "Tenant";
    const ARITY: usize = 8;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        check_arity::<Self>(fields)?;
        let info = decode_personal(Self::KIND, fields)?;

        Ok(Self {
            info,
            password: fields[4].to_string(),
            gender: parse_field(Self::KIND, "gender", fields[5])?,
            preferred_price: parse_field(Self::KIND, "preferredPrice", fields[6])?,
            preferred_suburb: fields[7].to_string(),
        })
    }

    fn to_fields(&self) -> Vec<String> {
        let mut fields = encode_personal(&self.info);
        fields.extend([
            self.password.clone(),
            self.gender.code().to_string(),
            format_float(self.preferred_price),
            self.preferred_suburb.clone(),
        ]);
        fields
    }
}
