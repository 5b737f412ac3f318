pub mod booking;
pub mod game;
pub mod time_slot;
pub mod timestamp;

pub use booking::{Booking, BookingDraft, BookingStatus, StatusFilter};
pub use game::Game;
pub use time_slot::TimeSlot;
