use std::io::{self, BufRead, Write};

use super::choice::{self, DetailChoice, IndexChoice, ListAction, ListChoice};
use super::MenuController;
use crate::records::{PersonalInfo, Property, PropertyId};
use crate::screens::{self, ListingKind, ListingRow};
use crate::workflows::validation::{validate_email, validate_name, validate_phone, validate_savings};
use crate::workflows::{ApplicationForm, SessionError, SubmissionError};

impl<R: BufRead, W: Write> MenuController<R, W> {
    fn listed_properties(&self, kind: ListingKind) -> Vec<Property> {
        match kind {
            ListingKind::Browse => self.session.properties().to_vec(),
            ListingKind::Wishlist => self.session.wishlist_properties(),
        }
    }

    /// Property list loop for Browse and Wishlist. Rows are recomputed on every pass.
    pub(super) fn property_menu(&mut self, kind: ListingKind) -> io::Result<()> {
        loop {
            let properties = self.listed_properties(kind);
            let rows: Vec<ListingRow<'_>> = properties
                .iter()
                .map(|property| ListingRow {
                    property,
                    wishlisted_on: self
                        .session
                        .wishlist_entry(property.id)
                        .map(|entry| entry.date_added),
                })
                .collect();
            screens::property_list(self.console.output(), kind, &rows)?;

            let input = self.console.prompt(None)?;
            match choice::parse_list_choice(&input, properties.len()) {
                ListChoice::Back => return Ok(()),
                ListChoice::Open(index) => self.property_detail(properties[index].id)?,
                ListChoice::InvalidNumber => self.show_error(screens::invalid_number)?,
                ListChoice::InvalidLetter => self.show_error(screens::invalid_letter)?,
                ListChoice::Action(action) => {
                    if properties.is_empty() {
                        screens::no_properties(self.console.output())?;
                        return self.console.pause();
                    }

                    let label = format!("Property no. (1 - {})", properties.len());
                    let input = self.console.prompt(Some(&label))?;
                    match choice::parse_index(&input, properties.len()) {
                        IndexChoice::Blank => {}
                        IndexChoice::Selected(index) => {
                            let property_id = properties[index].id;
                            match action {
                                ListAction::Wishlist => self.toggle_wishlist(property_id),
                                ListAction::Apply => self.application_form(property_id)?,
                            }
                        }
                        IndexChoice::OutOfRange => self.show_error(screens::invalid_number)?,
                        IndexChoice::NotANumber => self.show_error(screens::invalid_letter)?,
                    }
                }
            }
        }
    }

    fn property_detail(&mut self, property_id: PropertyId) -> io::Result<()> {
        loop {
            let Some(property) = self.session.property(property_id) else {
                return Ok(());
            };
            screens::property_detail(
                self.console.output(),
                property,
                self.session.is_wishlisted(property_id),
            )?;

            let input = self.console.prompt(None)?;
            match choice::parse_detail_choice(&input) {
                DetailChoice::Back => return Ok(()),
                DetailChoice::ToggleWishlist => self.toggle_wishlist(property_id),
                DetailChoice::Apply => self.application_form(property_id)?,
                DetailChoice::Invalid => {
                    screens::invalid_option(self.console.output(), 2)?;
                    self.console.pause()?;
                }
            }
        }
    }

    fn toggle_wishlist(&mut self, property_id: PropertyId) {
        match self.session.toggle_wishlist(property_id) {
            Ok(_) => {}
            Err(SessionError::Store(err)) => {
                tracing::error!(error = %err, %property_id, "wishlist change not persisted");
            }
            Err(err) => tracing::warn!(error = %err, %property_id, "wishlist toggle skipped"),
        }
    }

    fn application_form(&mut self, property_id: PropertyId) -> io::Result<()> {
        let (Some(property), Some(tenant)) = (
            self.session.property(property_id).cloned(),
            self.session.current_tenant().cloned(),
        ) else {
            return Ok(());
        };

        if self.session.has_rejected_application(property_id) {
            screens::application_failed(self.console.output())?;
            return self.console.pause();
        }

        screens::application_form(self.console.output(), &property)?;
        let current = tenant.info;
        let first_name = self.confirm_field(
            "First Name",
            &current.first_name,
            validate_name,
            "Invalid first name. Please enter a name with no more than 255 characters.",
        )?;
        let last_name = self.confirm_field(
            "Last Name",
            &current.last_name,
            validate_name,
            "Invalid last name. Please enter a name with no more than 255 characters.",
        )?;
        let email = self.confirm_field(
            "Email",
            &current.email,
            validate_email,
            "Invalid email format. Please use your Monash student email.",
        )?;
        let phone_no = self.confirm_field(
            "Phone Number",
            &current.phone_no,
            validate_phone,
            "Invalid phone number. Please enter a valid Australian mobile number.",
        )?;

        let savings = loop {
            let savings = self.console.prompt(Some("Savings (optional)"))?;
            if choice::is_blank(&savings) || validate_savings(&savings) {
                break savings;
            }
            screens::write_text(
                self.console.output(),
                "Invalid savings amount. Please enter a valid number.",
            )?;
        };

        let form = ApplicationForm {
            applicant: PersonalInfo {
                first_name,
                last_name,
                email,
                phone_no,
            },
            savings,
        };

        match self.session.submit_application(form, property_id) {
            Ok(_) => screens::application_submitted(self.console.output())?,
            Err(SubmissionError::Session(SessionError::Store(err))) => {
                tracing::error!(error = %err, %property_id, "application not persisted");
                screens::application_submitted(self.console.output())?;
            }
            Err(err) => {
                tracing::warn!(error = %err, %property_id, "application refused");
                screens::application_failed(self.console.output())?;
            }
        }
        self.console.pause()
    }

    /// Prompts with `current` as the default; blank keeps it, invalid input re-prompts.
    fn confirm_field(
        &mut self,
        label: &str,
        current: &str,
        is_valid: fn(&str) -> bool,
        error: &str,
    ) -> io::Result<String> {
        let prompt = format!("{label} [{current}]");
        loop {
            let input = self.console.prompt(Some(&prompt))?;
            if choice::is_blank(&input) {
                return Ok(current.to_string());
            }
            if is_valid(&input) {
                writeln!(self.console.output())?;
                return Ok(input);
            }
            screens::write_text(self.console.output(), error)?;
        }
    }

    fn show_error(&mut self, screen: fn(&mut W) -> io::Result<()>) -> io::Result<()> {
        screen(self.console.output())?;
        self.console.pause()
    }
}
