mod backdrop;
mod page;
mod popup;
mod status_bar;
mod toast;

pub use backdrop::BackdropWidget;
pub use page::PageWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;
pub use toast::ToastWidget;
