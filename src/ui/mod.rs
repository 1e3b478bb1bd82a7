pub mod backdrop;
pub mod common;
pub mod form;
pub mod results;
pub mod theme;

pub use theme::Theme;
