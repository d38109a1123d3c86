use theme_toggle::{ThemeProvider, ThemeToggle};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <div class="app-container">
                <header class="app-header">
                    <h1>{"Theme Toggle"}</h1>
                    <ThemeToggle />
                </header>

                <main class="app-main">
                    <p>{"Use the button in the header to switch between light and dark mode."}</p>
                </main>

                <style>
                    {include_str!("style.css")}
                </style>
            </div>
        </ThemeProvider>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
