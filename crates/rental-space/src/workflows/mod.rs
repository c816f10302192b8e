//! Tenant-facing operations over the loaded records: login, wishlist, applications.

pub mod applications;
pub mod rent;
pub mod session;
pub mod validation;
pub mod wishlist;

pub use applications::{ApplicationForm, SubmissionError};
pub use session::{RentalSession, SessionError};
pub use wishlist::WishlistToggle;
