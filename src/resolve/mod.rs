pub mod aliases;
pub mod option;
pub mod profile;
pub mod value;
