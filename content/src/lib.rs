pub mod bundle;
pub mod language;
pub mod markup;
pub mod navigation;
pub mod render;
pub mod slideshow;
pub mod theme;

pub use bundle::{Bundle, Translations};
pub use language::Language;
pub use navigation::Section;
pub use slideshow::Slideshow;
pub use theme::Theme;
