pub mod blank;
pub mod progress;
