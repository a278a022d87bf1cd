pub mod app;
pub mod input;
pub mod modal;
pub mod render;
pub mod text_input;
pub mod theme;

pub use app::run;
