use gloo::console;
use yew::prelude::*;

use crate::components::icons::{MoonIcon, SunIcon};
use crate::hooks::use_mounted::use_mounted;
use crate::hooks::use_theme::{ThemeHandle, use_theme};
use crate::models::{MountState, Theme};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToggleIcon {
    Moon,
    Sun,
}

/// What the toggle shows for a given mount state and theme
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ToggleView {
    pub icon: ToggleIcon,
    /// Names the theme the user would switch to
    pub label: &'static str,
    pub aria_label: &'static str,
    pub next: Theme,
}

impl ToggleView {
    /// `None` while unmounted: nothing is rendered until the theme is trustworthy.
    pub const fn resolve(mount: MountState, theme: Option<Theme>) -> Option<Self> {
        if !mount.is_mounted() {
            return None;
        }

        let view = match theme {
            Some(Theme::Light) => Self {
                icon: ToggleIcon::Moon,
                label: "Dark",
                aria_label: "Switch to dark theme",
                next: Theme::toggled(theme),
            },
            _ => Self {
                icon: ToggleIcon::Sun,
                label: "Light",
                aria_label: "Switch to light theme",
                next: Theme::toggled(theme),
            },
        };
        Some(view)
    }

    /// Requests the opposite theme from the theme state holder
    pub fn activate(&self, set_theme: &Callback<Theme>) {
        set_theme.emit(self.next);
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    /// Explicit theme state; falls back to the enclosing `ThemeProvider`
    #[prop_or_default]
    pub handle: Option<ThemeHandle>,
}

/// An explicitly passed handle wins over the enclosing provider's
pub fn select_handle(
    prop: Option<ThemeHandle>,
    context: Option<ThemeHandle>,
) -> Option<ThemeHandle> {
    prop.or(context)
}

/// Theme toggle button component
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let mount = use_mounted();
    let context = use_theme();

    let Some(handle) = select_handle(props.handle.clone(), context) else {
        if mount.is_mounted() {
            console::warn!("ThemeToggle has no theme handle and no ThemeProvider");
        }
        return html! {};
    };

    let Some(view) = ToggleView::resolve(mount, handle.theme) else {
        return html! {};
    };

    let onclick = {
        let set_theme = handle.set_theme;
        Callback::from(move |_: MouseEvent| view.activate(&set_theme))
    };

    let icon = match view.icon {
        ToggleIcon::Moon => html! { <MoonIcon /> },
        ToggleIcon::Sun => html! { <SunIcon /> },
    };

    html! {
        <button
            type="button"
            class="theme-toggle"
            {onclick}
            aria-label={view.aria_label}
            title={view.aria_label}
        >
            {icon}
            <span class="theme-toggle-label">{view.label}</span>
        </button>
    }
}
