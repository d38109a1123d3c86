pub mod use_mounted;
pub mod use_theme;
