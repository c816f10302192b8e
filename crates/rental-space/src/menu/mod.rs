//! Menu-driven controller: reads a choice, dispatches to a handler, redraws.
//!
//! Blank input steps back one screen everywhere. Bad input shows an error screen and
//! re-prompts. The loop only ends on "Exit" or when the input stream closes.

pub mod choice;
mod properties;

use std::io::{self, BufRead, Write};

use crate::console::Console;
use crate::screens;
use crate::workflows::validation::validate_email;
use crate::workflows::RentalSession;

const GUEST_OPTIONS: [&str; 2] = ["Login", "Exit"];
const TENANT_OPTIONS: [&str; 4] = ["Browse Property", "Wishlist", "Contact", "Logout"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct MenuController<R, W> {
    session: RentalSession,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> MenuController<R, W> {
    pub fn new(session: RentalSession, console: Console<R, W>) -> Self {
        Self { session, console }
    }

    pub fn into_parts(self) -> (RentalSession, Console<R, W>) {
        (self.session, self.console)
    }

    /// Runs until the guest chooses Exit or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let flow = if self.session.current_tenant().is_some() {
                self.tenant_home().map(|()| Flow::Continue)
            } else {
                self.guest_home()
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    tracing::info!("exit requested");
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    tracing::info!("console input closed, exiting");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn guest_home(&mut self) -> io::Result<Flow> {
        screens::home(self.console.output(), &GUEST_OPTIONS, None)?;
        let selection = self.prompt_menu(GUEST_OPTIONS.len())?;

        match selection.trim() {
            "1" => {
                self.login()?;
                Ok(Flow::Continue)
            }
            "2" => Ok(Flow::Exit),
            _ => {
                self.invalid_option(GUEST_OPTIONS.len())?;
                Ok(Flow::Continue)
            }
        }
    }

    fn tenant_home(&mut self) -> io::Result<()> {
        screens::home(
            self.console.output(),
            &TENANT_OPTIONS,
            self.session.current_tenant().map(|tenant| &tenant.info),
        )?;
        let selection = self.prompt_menu(TENANT_OPTIONS.len())?;

        match selection.trim() {
            "1" => self.property_menu(screens::ListingKind::Browse),
            "2" => self.property_menu(screens::ListingKind::Wishlist),
            "3" => {
                screens::contact(self.console.output())?;
                self.console.pause()
            }
            "4" => {
                self.session.logout();
                Ok(())
            }
            _ => self.invalid_option(TENANT_OPTIONS.len()),
        }
    }

    fn login(&mut self) -> io::Result<()> {
        loop {
            screens::login(self.console.output())?;

            screens::leave_blank_to_return(self.console.output())?;
            let email = loop {
                let email = self.console.prompt(Some("Email"))?;
                if choice::is_blank(&email) {
                    return Ok(());
                }
                if validate_email(&email) {
                    break email;
                }
                screens::write_text(
                    self.console.output(),
                    "Invalid email format. Please use your Monash student email.",
                )?;
            };

            screens::leave_blank_to_return(self.console.output())?;
            let password = self.console.prompt(Some("Password"))?;
            if choice::is_blank(&password) {
                return Ok(());
            }

            if self.session.login(&email, &password) {
                return Ok(());
            }

            screens::login_failed(self.console.output())?;
            self.console.pause()?;
        }
    }

    fn prompt_menu(&mut self, option_count: usize) -> io::Result<String> {
        let label = format!("Input (1 - {option_count})");
        self.console.prompt(Some(&label))
    }

    fn invalid_option(&mut self, option_count: usize) -> io::Result<()> {
        screens::invalid_option(self.console.output(), option_count)?;
        self.console.pause()
    }
}
