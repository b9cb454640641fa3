pub mod counted;
pub mod integrate;
