//! Fixed-width text screens. Rendering only: nothing here reads input or touches records.

mod layout;

use chrono::NaiveDateTime;
use std::io::{self, Write};

use crate::records::{format_timestamp, PersonalInfo, Property};
use crate::workflows::rent::{fortnightly_rent, monthly_rent};

pub use layout::{
    cell, format_amount, wrap_text, write_header, write_menu_options, write_sub_menu_options,
    write_text, SCREEN_WIDTH,
};

const PRESS_ENTER: &str = "\n<- Press enter to return.";
const LEAVE_BLANK: &str = "\n<- Leave blank to return.";

/// Which collection a property list is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Browse,
    Wishlist,
}

impl ListingKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Browse => "Properties",
            Self::Wishlist => "Wishlist",
        }
    }

    /// Labels for the `a` and `b` actions.
    pub const fn actions(self) -> [(&'static str, &'static str); 2] {
        match self {
            Self::Browse => [
                ("Add to Wishlist", "Save a property"),
                ("Apply", "Apply to rent a property"),
            ],
            Self::Wishlist => [
                ("Remove from Wishlist", "Remove a property"),
                ("Apply", "Apply to rent a property"),
            ],
        }
    }
}

/// One property-list row and, when starred, when it was saved.
#[derive(Debug, Clone, Copy)]
pub struct ListingRow<'a> {
    pub property: &'a Property,
    pub wishlisted_on: Option<NaiveDateTime>,
}

pub fn leave_blank_to_return<W: Write>(out: &mut W) -> io::Result<()> {
    write_text(out, LEAVE_BLANK)
}

pub fn message<W: Write>(out: &mut W, title: &str, body: &str) -> io::Result<()> {
    write_header(out, title, None)?;
    write_text(out, body)?;
    write_text(out, PRESS_ENTER)
}

pub fn home<W: Write>(
    out: &mut W,
    options: &[&str],
    tenant: Option<&PersonalInfo>,
) -> io::Result<()> {
    let (title, greeting) = match tenant {
        Some(info) => (
            format!("Hi, {}!", info.full_name()),
            "How can we assist you today?",
        ),
        None => (
            "Welcome to MRS!".to_string(),
            "You must be logged in to use the system",
        ),
    };

    write_header(out, &title, None)?;
    write_text(out, &format!("{greeting}\n\n"))?;
    write_text(out, "Please enter the number of your choice.\n\n")?;
    write_menu_options(out, options)
}

pub fn login<W: Write>(out: &mut W) -> io::Result<()> {
    write_header(out, "Login", None)?;
    write_text(out, "Please enter your login information below:\n")
}

pub fn login_failed<W: Write>(out: &mut W) -> io::Result<()> {
    message(
        out,
        "Login failed",
        "\nYour email address and password are not match.\n\nPlease check your credentials and try again.",
    )
}

pub fn contact<W: Write>(out: &mut W) -> io::Result<()> {
    write_header(out, "Contact Us", None)?;
    write_text(
        out,
        "For any inquiries or issues with your property application, please send an email to:",
    )?;
    write_text(out, "support@mproperty.com.au")?;
    write_text(out, PRESS_ENTER)
}

pub fn invalid_option<W: Write>(out: &mut W, option_count: usize) -> io::Result<()> {
    message(
        out,
        "Invalid Option",
        &format!(
            "Your option entered is invalid.\nPlease enter a number between 1 - {option_count}."
        ),
    )
}

pub fn invalid_number<W: Write>(out: &mut W) -> io::Result<()> {
    message(
        out,
        "Invalid Number",
        "Your option entered is invalid.\nPlease enter a correct number",
    )
}

pub fn invalid_letter<W: Write>(out: &mut W) -> io::Result<()> {
    message(
        out,
        "Invalid Letter",
        "Your option entered is invalid.\nPlease enter a correct letter",
    )
}

pub fn no_properties<W: Write>(out: &mut W) -> io::Result<()> {
    message(
        out,
        "No Properties",
        "There are currently no properties available.",
    )
}

pub fn property_list<W: Write>(
    out: &mut W,
    kind: ListingKind,
    rows: &[ListingRow<'_>],
) -> io::Result<()> {
    write_header(out, kind.title(), None)?;

    if rows.is_empty() {
        write_text(out, "There are currently no properties available.\n")?;
        return leave_blank_to_return(out);
    }

    for (index, row) in rows.iter().enumerate() {
        let property = row.property;
        let star = if row.wishlisted_on.is_some() { "★" } else { "☆" };
        write_text(out, &format!("[{}] {} {star}", index + 1, property.address))?;
        writeln!(
            out,
            "{:<15}|{}|{:>15}",
            property.suburb,
            cell(property.property_type.label()),
            property.furnished_label()
        )?;
        writeln!(
            out,
            "{:<15}|{}|{:>15}",
            property.status_label(),
            cell(&format!("A${}", format_amount(f64::from(property.price), 0))),
            property.date_added.format("%d/%m/%Y").to_string()
        )?;
        if let Some(saved) = row.wishlisted_on {
            write_text(out, &format!("Wishlisted on {}", format_timestamp(&saved)))?;
        }
        writeln!(out)?;
    }

    write_text(out, "Please enter the letter of your choice.\n")?;
    write_sub_menu_options(out, &kind.actions(), true)?;
    leave_blank_to_return(out)
}

pub fn property_detail<W: Write>(
    out: &mut W,
    property: &Property,
    wishlisted: bool,
) -> io::Result<()> {
    let weekly = f64::from(property.price);

    write_header(out, &property.address, None)?;
    write_text(out, &format!("Address: {}", property.full_address()))?;
    write_text(out, &format!("Type: {}", property.property_type.label()))?;
    write_text(out, &format!("Status: {}", property.status_label()))?;
    write_text(out, &format!("Furnished: {}", property.furnished_label()))?;
    write_text(
        out,
        &format!("Price: A${} per week", format_amount(weekly, 2)),
    )?;
    writeln!(
        out,
        "{:7}A${} per fortnight",
        "",
        format_amount(fortnightly_rent(weekly), 2)
    )?;
    writeln!(
        out,
        "{:7}A${} per month",
        "",
        format_amount(monthly_rent(weekly), 2)
    )?;
    write_text(
        out,
        &format!(
            "Inspection: {}\n",
            format_timestamp(&property.inspection_time)
        ),
    )?;
    write_text(out, &format!("Application URL: {}", property.app_form_url))?;
    write_text(out, &format!("Description: {}", property.description))?;

    write_text(out, "\nPlease enter the letter of your choice.")?;
    writeln!(out)?;
    let wishlist_action = if wishlisted {
        ("Remove", "Remove from Wishlist")
    } else {
        ("Add", "Add to Wishlist")
    };
    write_sub_menu_options(
        out,
        &[wishlist_action, ("Apply", "Apply to rent a property")],
        false,
    )?;
    leave_blank_to_return(out)
}

pub fn application_form<W: Write>(out: &mut W, property: &Property) -> io::Result<()> {
    write_header(
        out,
        "Application Form",
        Some(&format!("for {}", property.address)),
    )?;
    write_text(out, "Please enter the following information:")
}

pub fn application_submitted<W: Write>(out: &mut W) -> io::Result<()> {
    message(
        out,
        "Application submitted",
        "Your rental application has been successfully submitted!\n\n\
Kindly email your proof of income/funds to landlord@mproperty.com.au.\n\n\
Please check out for important information from RTBA at https://rentalbonds.vic.gov.au/Bond/Lodgment/Begin.",
    )
}

pub fn application_failed<W: Write>(out: &mut W) -> io::Result<()> {
    message(
        out,
        "Application failed",
        "You have rejected application for this property.\n\nRe-applying is not possible at this moment.",
    )
}
