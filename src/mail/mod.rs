pub mod date;
pub mod preview;
