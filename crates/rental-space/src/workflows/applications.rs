use chrono::Local;

use super::session::{RentalSession, SessionError};
use super::validation::parse_savings;
use crate::records::{Application, ApplicationStatus, PersonalInfo, PropertyId};

/// Details collected by the application form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationForm {
    pub applicant: PersonalInfo,
    /// Raw savings input; blank means none.
    pub savings: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("a previous application for property {property_id} was rejected")]
    PreviouslyRejected { property_id: PropertyId },
    #[error("savings '{0}' is not a number")]
    InvalidSavings(String),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// True when `email` already holds a REJECTED application for `property_id`.
pub fn has_rejected_application(
    applications: &[Application],
    email: &str,
    property_id: PropertyId,
) -> bool {
    applications.iter().any(|application| {
        application.applicant.email == email
            && application.property_id == property_id
            && application.status == ApplicationStatus::Rejected
    })
}

impl RentalSession {
    /// Whether the logged-in tenant was rejected for `property_id` before.
    pub fn has_rejected_application(&self, property_id: PropertyId) -> bool {
        self.current_tenant().is_some_and(|tenant| {
            has_rejected_application(&self.records.applications, tenant.email(), property_id)
        })
    }

    /// Lodges a SUBMITTED application for `property_id` and flushes every collection.
    ///
    /// The rejection guard keys on the logged-in tenant's email, not the one typed into the form.
    pub fn submit_application(
        &mut self,
        form: ApplicationForm,
        property_id: PropertyId,
    ) -> Result<Application, SubmissionError> {
        let tenant_email = self.require_tenant()?.email().to_string();
        if has_rejected_application(&self.records.applications, &tenant_email, property_id) {
            tracing::info!(%tenant_email, %property_id, "re-application refused");
            return Err(SubmissionError::PreviouslyRejected { property_id });
        }

        let saving = parse_savings(&form.savings)
            .ok_or_else(|| SubmissionError::InvalidSavings(form.savings.clone()))?;

        let application = Application {
            applicant: form.applicant,
            saving,
            property_id,
            date_submitted: Local::now().naive_local(),
            status: ApplicationStatus::Submitted,
        };
        self.records.applications.push(application.clone());
        tracing::info!(%tenant_email, %property_id, "application submitted");

        self.flush().map_err(SessionError::from)?;
        Ok(application)
    }
}
