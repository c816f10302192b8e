use super::RecordError;

/// Number of leading columns occupied by [`PersonalInfo`] in tenant and application rows.
pub const PERSONAL_FIELDS: usize = 4;

/// Contact details shared by tenants and the applications they submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_no: String,
}

impl PersonalInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Reads `[first_name, last_name, email, phone_no]` from the front of a row.
pub(crate) fn decode_personal(
    record: &'static str,
    fields: &[&str],
) -> Result<PersonalInfo, RecordError> {
    match fields {
        [first_name, last_name, email, phone_no, ..] => Ok(PersonalInfo {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            phone_no: phone_no.to_string(),
        }),
        _ => Err(RecordError::Arity {
            record,
            expected: PERSONAL_FIELDS,
            found: fields.len(),
        }),
    }
}

pub(crate) fn encode_personal(info: &PersonalInfo) -> Vec<String> {
    vec![
        info.first_name.clone(),
        info.last_name.clone(),
        info.email.clone(),
        info.phone_no.clone(),
    ]
}
