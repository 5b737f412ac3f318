pub mod admin;
pub mod booking;
pub mod format;
pub mod slots;
pub mod validation;
