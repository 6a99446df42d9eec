pub mod catalog;
pub mod suggestion;
