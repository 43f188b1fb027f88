pub mod navbar;
pub mod slideshow;
pub mod text;
