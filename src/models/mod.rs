pub mod error;
pub mod mount;
pub mod theme;

pub use error::ThemeError;
pub use mount::MountState;
pub use theme::Theme;
