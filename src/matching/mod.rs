pub mod catalog;
pub mod hints;
pub mod matcher;
