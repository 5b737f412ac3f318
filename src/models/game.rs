use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Game {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Whole rupees per session.
    pub price: u32,
    /// Session length in hours. Informational only; a booking always
    /// occupies exactly one hourly slot.
    pub duration: f32,
    pub image: &'static str,
}
