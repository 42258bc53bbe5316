pub mod aggregate;

pub use aggregate::{Expiry, License, LicenseDraft, EXPIRY_WARNING_DAYS};
