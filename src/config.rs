/// Configuration constants for the theme toggle
pub struct Config;

impl Config {
    /// Width and height of the toggle icons, in pixels
    pub const ICON_SIZE: u32 = 18;

    /// Attribute on `<html>` that carries the resolved theme
    pub const THEME_ATTRIBUTE: &'static str = "data-theme";

    /// Media query matching a dark system colour scheme
    pub const DARK_SCHEME_QUERY: &'static str = "(prefers-color-scheme: dark)";
}
