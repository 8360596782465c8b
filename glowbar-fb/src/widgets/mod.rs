pub mod card;
pub mod progress;
