pub mod modal;
pub mod navigation;
pub mod phone;
pub mod statusbar;
pub mod toast;
