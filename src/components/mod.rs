pub mod icons;
pub mod theme_toggle;

pub use icons::{MoonIcon, SunIcon};
pub use theme_toggle::{ThemeToggle, ToggleIcon, ToggleView, select_handle};
