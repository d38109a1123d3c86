pub mod components;
pub mod config;
pub mod hooks;
pub mod models;

pub use components::ThemeToggle;
pub use hooks::use_theme::{ThemeHandle, ThemeProvider, resolve_initial_theme, use_theme};
pub use models::{MountState, Theme, ThemeError};
