pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod page;
pub mod scroll;
pub mod sections;
pub mod theme;
pub mod themes;
pub mod widgets;

pub use app::App;
pub use theme::Theme;
pub use themes::load_theme;
