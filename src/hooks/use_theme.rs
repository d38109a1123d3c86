use gloo::console;
use yew::prelude::*;

use crate::config::Config;
use crate::models::{Theme, ThemeError};

/// Theme state handed to consumers: the current value plus its setter.
///
/// `theme` is `None` until the provider has resolved it on the client.
#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Option<Theme>,
    pub set_theme: Callback<Theme>,
}

impl ThemeHandle {
    pub fn new(theme: Option<Theme>, set_theme: Callback<Theme>) -> Self {
        Self { theme, set_theme }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    /// Theme to start from; the system preference is used when absent.
    /// Read once after mount, later changes do not reset the current theme.
    #[prop_or_default]
    pub default_theme: Option<Theme>,
    #[prop_or_default]
    pub children: Html,
}

/// Holds the theme for its subtree and exposes it as a `ThemeHandle` context
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    // Unresolved until the first client render completes
    let theme = use_state(|| None::<Theme>);

    // Effect: resolve the initial theme after mount
    {
        let theme = theme.clone();
        let default_theme = props.default_theme;
        use_effect_with((), move |_| {
            let resolved = resolve_initial_theme(default_theme, system_prefers_dark());
            console::debug!(format!("Resolved initial theme: {resolved}"));
            theme.set(Some(resolved));
            || ()
        });
    }

    // Effect: reflect the resolved theme on the document
    use_effect_with(*theme, move |theme| {
        if let Some(theme) = *theme {
            if let Err(e) = apply_theme_to_dom(theme) {
                console::warn!(format!("Failed to apply theme: {e}"));
            }
        }
        || ()
    });

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: Theme| {
            console::debug!(format!("Theme set to {next}"));
            theme.set(Some(next));
        })
    };

    let handle = ThemeHandle::new(*theme, set_theme);

    html! {
        <ContextProvider<ThemeHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<ThemeHandle>>
    }
}

/// Theme handle from the nearest `ThemeProvider`, if any
#[hook]
pub fn use_theme() -> Option<ThemeHandle> {
    use_context::<ThemeHandle>()
}

/// Initial theme: the explicit default, then the system preference, then `Light`
pub fn resolve_initial_theme(default_theme: Option<Theme>, prefers_dark: Option<bool>) -> Theme {
    match (default_theme, prefers_dark) {
        (Some(theme), _) => theme,
        (None, Some(true)) => Theme::Dark,
        (None, Some(false) | None) => Theme::Light,
    }
}

/// `None` when the browser cannot evaluate the colour-scheme media query
fn system_prefers_dark() -> Option<bool> {
    web_sys::window()
        .and_then(|w| w.match_media(Config::DARK_SCHEME_QUERY).ok().flatten())
        .map(|mq| mq.matches())
}

/// Writes the theme name to `Config::THEME_ATTRIBUTE` on the document element
fn apply_theme_to_dom(theme: Theme) -> Result<(), ThemeError> {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or_else(|| ThemeError::DomUnavailable("no document element".to_string()))?;

    root.set_attribute(Config::THEME_ATTRIBUTE, theme.as_str())?;
    Ok(())
}
