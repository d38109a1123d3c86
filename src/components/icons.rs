use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(Config::ICON_SIZE)]
    pub size: u32,
}

#[function_component(MoonIcon)]
pub fn moon_icon(props: &IconProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            class="icon icon-moon"
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
        </svg>
    }
}

#[function_component(SunIcon)]
pub fn sun_icon(props: &IconProps) -> Html {
    let size = props.size.to_string();

    html! {
        <svg
            class="icon icon-sun"
            xmlns="http://www.w3.org/2000/svg"
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <circle cx="12" cy="12" r="4" />
            <path d="M12 2v2" />
            <path d="M12 20v2" />
            <path d="m4.93 4.93 1.41 1.41" />
            <path d="m17.66 17.66 1.41 1.41" />
            <path d="M2 12h2" />
            <path d="M20 12h2" />
            <path d="m6.34 17.66-1.41 1.41" />
            <path d="m19.07 4.93-1.41 1.41" />
        </svg>
    }
}
