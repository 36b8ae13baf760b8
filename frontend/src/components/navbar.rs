use yew::prelude::*;

use crate::{Model, Msg};

const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "#home"),
    ("Analyze", "#analyze"),
    ("Find Doctor", "#doctors"),
    ("About", "#about"),
];

pub fn render_navbar(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <nav class="navbar">
            <a href="#home" class="brand">
                <i class="fa-solid fa-wave-square"></i>
                <span>{"Derm"}<span class="accent">{"bot"}</span></span>
            </a>

            <div class="nav-links">
                { for NAV_ITEMS.iter().map(|(name, href)| html! {
                    <a href={*href}>{ *name }</a>
                })}
            </div>

            <button
                class="theme-toggle"
                onclick={link.callback(|_| Msg::ToggleTheme)}
                title={ if model.theme == "dark" { "Switch to Light Mode" } else { "Switch to Dark Mode" } }
            >
                { if model.theme == "dark" {
                    html! { <i class="fa-solid fa-sun"></i> }
                } else {
                    html! { <i class="fa-solid fa-moon"></i> }
                }}
            </button>
        </nav>
    }
}
