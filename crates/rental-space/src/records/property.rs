use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

use super::{
    check_arity, format_float, format_timestamp, parse_field, parse_flag, parse_timestamp,
    CsvRecord, RecordError,
};

/// Property identifier. Supplied by the data file, never generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyId(pub u32);

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PropertyId {
    type Err = std::num::ParseIntError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value.parse().map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    House,
    Unit,
    Townhouse,
    Apartment,
}

impl PropertyType {
    pub const fn code(self) -> &'static str {
        match self {
            Self::House => "HOUSE",
            Self::Unit => "UNIT",
            Self::Townhouse => "TOWNHOUSE",
            Self::Apartment => "APARTMENT",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::House => "House",
            Self::Unit => "Unit",
            Self::Townhouse => "Townhouse",
            Self::Apartment => "Apartment",
        }
    }
}

impl FromStr for PropertyType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "HOUSE" => Ok(Self::House),
            "UNIT" => Ok(Self::Unit),
            "TOWNHOUSE" => Ok(Self::Townhouse),
            "APARTMENT" => Ok(Self::Apartment),
            _ => Err("expected HOUSE, UNIT, TOWNHOUSE or APARTMENT".to_string()),
        }
    }
}

/// A rental listing. `price` is the weekly rent in AUD.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub zip_code: String,
    pub furnished: bool,
    pub property_type: PropertyType,
    pub price: f32,
    pub app_form_url: String,
    pub inspection_time: NaiveDateTime,
    pub description: String,
    pub off_market: bool,
    pub date_added: NaiveDateTime,
}

impl Property {
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.suburb, self.state, self.zip_code
        )
    }

    pub fn status_label(&self) -> &'static str {
        if self.off_market {
            "Off market"
        } else {
            "Leasing"
        }
    }

    pub fn furnished_label(&self) -> &'static str {
        if self.furnished {
            "Furnished"
        } else {
            "Not Furnished"
        }
    }
}

impl CsvRecord for Property {
    const KIND: &'static str = "Property";
    const ARITY: usize = 13;

    fn from_fields(fields: &[&str]) -> Result<Self, RecordError> {
        check_arity::<Self>(fields)?;

        Ok(Self {
            id: parse_field(Self::KIND, "propertyID", fields[0])?,
            address: fields[1].to_string(),
            suburb: fields[2].to_string(),
            state: fields[3].to_string(),
            zip_code: fields[4].to_string(),
            furnished: parse_flag(fields[5]),
            property_type: parse_field(Self::KIND, "propertyType", fields[6])?,
            price: parse_field(Self::KIND, "price", fields[7])?,
            app_form_url: fields[8].to_string(),
            inspection_time: parse_timestamp(Self::KIND, "inspectionTime", fields[9])?,
            description: fields[10].to_string(),
            off_market: parse_flag(fields[11]),
            date_added: parse_timestamp(Self::KIND, "dateAdded", fields[12])?,
        })
    }

    fn to_fields(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.address.clone(),
            self.suburb.clone(),
            self.state.clone(),
            self.zip_code.clone(),
            self.furnished.to_string(),
            self.property_type.code().to_string(),
            format_float(self.price),
            self.app_form_url.clone(),
            format_timestamp(&self.inspection_time),
            self.description.clone(),
            self.off_market.to_string(),
            format_timestamp(&self.date_added),
        ]
    }
}
