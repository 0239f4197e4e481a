pub mod navbar;
pub mod reveal;
