//! End-to-end menu scenarios driven through scripted console input against a scratch data
//! directory, checking both what the tenant sees and what lands on disk.

mod common {
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    use rental_space::console::Console;
    use rental_space::menu::MenuController;
    use rental_space::store::{CsvStore, RecordSet};
    use rental_space::workflows::RentalSession;
    use tempfile::TempDir;

    pub(super) const EMAIL: &str = "jdoe1@student.monash.edu";

    const TENANTS: &str = "\
Jane,Doe,jdoe1@student.monash.edu,0412345678,pw1,FEMALE,450.0,Clayton
Sam,Lee,slee2@student.monash.edu,0423456789,pw2,MALE,380.0,Caulfield
";

    const PROPERTIES: &str = "\
1,12 Wellington Rd,Clayton,VIC,3168,true,TOWNHOUSE,525.5,https://forms.example/1,12/04/2024 10:00,Close to campus,false,01/04/2024 09:15
2,4 Dandenong Rd,Caulfield,VIC,3145,false,APARTMENT,410.0,https://forms.example/2,15/04/2024 14:30,Near the station,false,02/04/2024 11:00
";

    const APPLICATIONS: &str = "\
Jane,Doe,jdoe1@student.monash.edu,0412345678,0.0,2,03/04/2024 08:00,REJECTED
";

    pub(super) fn data_dir() -> TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        write(dir.path(), "tenant.csv", TENANTS);
        write(dir.path(), "property.csv", PROPERTIES);
        write(dir.path(), "application.csv", APPLICATIONS);
        dir
    }

    pub(super) fn write(dir: &Path, name: &str, contents: &str) {
        fs::write(dir.join(name), contents).expect("fixture written");
    }

    /// Runs the controller over `script` and returns everything it printed.
    pub(super) fn run_script(dir: &Path, script: &[&str]) -> String {
        let mut input = script.join("\n");
        input.push('\n');

        let session = RentalSession::open(CsvStore::new(dir));
        let console = Console::new(Cursor::new(input.into_bytes()), Vec::new());
        let mut controller = MenuController::new(session, console);
        controller.run().expect("controller finishes cleanly");

        let (_, console) = controller.into_parts();
        String::from_utf8(console.into_output()).expect("utf8 output")
    }

    pub(super) fn reload(dir: &Path) -> RecordSet {
        RecordSet::load(&CsvStore::new(dir))
    }
}

use common::{data_dir, reload, run_script, write, EMAIL};
use rental_space::records::{ApplicationStatus, PropertyId};

#[test]
fn failed_login_shows_error_and_returns_home() {
    let dir = data_dir();
    let output = run_script(dir.path(), &["1", EMAIL, "wrong", "", "", "2"]);

    assert!(output.contains("Login failed"));
    assert!(output.contains("Your email address and password are not match."));
    assert!(!output.contains("Hi, Jane Doe!"));
}

#[test]
fn non_monash_email_is_rejected_before_password() {
    let dir = data_dir();
    let output = run_script(dir.path(), &["1", "jane@gmail.com", "", "2"]);

    assert!(output.contains("Invalid email format."));
    assert!(!output.contains("Password:"));
}

#[test]
fn successful_login_greets_tenant_and_logout_returns_to_guest_menu() {
    let dir = data_dir();
    let output = run_script(dir.path(), &["1", EMAIL, "pw1", "4", "2"]);

    assert!(output.contains("*** Hi, Jane Doe! ***"));
    assert!(output.contains("[4]   Logout"));
    assert_eq!(output.matches("*** Welcome to MRS! ***").count(), 2);
}

#[test]
fn closed_input_ends_the_session_cleanly() {
    let dir = data_dir();
    let output = run_script(dir.path(), &["1", EMAIL, "pw1"]);
    assert!(output.contains("Hi, Jane Doe!"));
}

#[test]
fn wishlist_toggle_from_browse_is_persisted() {
    let dir = data_dir();
    let output = run_script(
        dir.path(),
        &["1", EMAIL, "pw1", "1", "a", "1", "", "2", "", "4", "2"],
    );

    assert!(output.contains("[1] 12 Wellington Rd ★"));
    assert!(output.contains("Wishlisted on "));
    assert!(output.contains("[a] Remove from Wishlist"));

    let records = reload(dir.path());
    assert_eq!(records.wishlist.len(), 1);
    assert_eq!(records.wishlist[0].property_id, PropertyId(1));
    assert_eq!(records.wishlist[0].tenant_email, EMAIL);
}

#[test]
fn toggling_twice_from_detail_leaves_wishlist_empty() {
    let dir = data_dir();
    run_script(dir.path(), &["1", EMAIL, "pw1", "1", "2", "1", "1", "", ""]);

    assert!(reload(dir.path()).wishlist.is_empty());
}

#[test]
fn application_with_defaults_is_submitted_and_saved() {
    let dir = data_dir();
    let output = run_script(
        dir.path(),
        &["1", EMAIL, "pw1", "1", "1", "2", "", "", "", "", "1500", "", "", ""],
    );

    assert!(output.contains("First Name [Jane]"));
    assert!(output.contains("Phone Number [0412345678]"));
    assert!(output.contains("Application submitted"));

    let records = reload(dir.path());
    assert_eq!(records.applications.len(), 2);
    let saved = &records.applications[1];
    assert_eq!(saved.applicant.first_name, "Jane");
    assert_eq!(saved.applicant.email, EMAIL);
    assert_eq!(saved.property_id, PropertyId(1));
    assert_eq!(saved.saving, 1500.0);
    assert_eq!(saved.status, ApplicationStatus::Submitted);
}

#[test]
fn invalid_form_answers_re_prompt_until_valid() {
    let dir = data_dir();
    let output = run_script(
        dir.path(),
        &[
            "1", EMAIL, "pw1", "1", "b", "1", "", "Smith", "bad@gmail.com", "", "123",
            "0498765432", "lots", "", "",
        ],
    );

    assert!(output.contains("Invalid email format."));
    assert!(output.contains("Invalid phone number."));
    assert!(output.contains("Invalid savings amount."));

    let records = reload(dir.path());
    let saved = records.applications.last().expect("application saved");
    assert_eq!(saved.applicant.last_name, "Smith");
    assert_eq!(saved.applicant.email, EMAIL);
    assert_eq!(saved.applicant.phone_no, "0498765432");
    assert_eq!(saved.saving, 0.0);
}

#[test]
fn rejected_tenant_cannot_reapply() {
    let dir = data_dir();
    let output = run_script(dir.path(), &["1", EMAIL, "pw1", "1", "b", "2", ""]);

    assert!(output.contains("Application failed"));
    assert!(!output.contains("*** Application Form ***"));
    assert_eq!(reload(dir.path()).applications.len(), 1);
}

#[test]
fn other_tenants_are_not_blocked_by_a_rejection() {
    let dir = data_dir();
    let output = run_script(
        dir.path(),
        &[
            "1",
            "slee2@student.monash.edu",
            "pw2",
            "1",
            "b",
            "2",
            "",
            "",
            "",
            "",
            "",
            "",
        ],
    );

    assert!(output.contains("Application submitted"));
    assert_eq!(reload(dir.path()).applications.len(), 2);
}

#[test]
fn bad_menu_input_shows_error_screens() {
    let dir = data_dir();
    let output = run_script(
        dir.path(),
        &["9", "", "1", EMAIL, "pw1", "7", "", "1", "5", "", "x", "", "a", "zz", ""],
    );

    assert!(output.contains("*** Invalid Option ***"));
    assert!(output.contains("Please enter a number between 1 - 2."));
    assert!(output.contains("Please enter a number between 1 - 4."));
    assert!(output.contains("*** Invalid Number ***"));
    assert!(output.contains("*** Invalid Letter ***"));
}

#[test]
fn empty_wishlist_hides_actions_and_refuses_them() {
    let dir = data_dir();
    let output = run_script(dir.path(), &["1", EMAIL, "pw1", "2", "a", "", "4", "2"]);

    assert!(output.contains("There are currently no properties available."));
    assert!(output.contains("*** No Properties ***"));
    assert!(!output.contains("[a] Remove from Wishlist"));
}

#[test]
fn empty_browse_list_hides_actions_and_refuses_them() {
    let dir = data_dir();
    write(dir.path(), "property.csv", "");
    let output = run_script(dir.path(), &["1", EMAIL, "pw1", "1", "b", "", "4", "2"]);

    assert!(output.contains("*** Properties ***"));
    assert!(output.contains("There are currently no properties available."));
    assert!(output.contains("*** No Properties ***"));
    assert!(!output.contains("[a] Add to Wishlist"));
    assert!(!output.contains("Property no."));
    assert!(!output.contains("*** Application Form ***"));
    assert_eq!(reload(dir.path()).applications.len(), 1);
}

#[test]
fn missing_data_files_start_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_script(dir.path(), &["1", EMAIL, "pw1", "", "", "2"]);

    assert!(output.contains("Login failed"));
    assert_eq!(reload(dir.path()), Default::default());
}
