use yew::prelude::*;

pub fn render_hero() -> Html {
    let features = [
        ("fa-brain", "AI-Powered Analysis"),
        ("fa-bolt", "Instant Results"),
        ("fa-shield-halved", "Privacy First"),
    ];

    html! {
        <section id="home" class="hero">
            <div class="hero-badge">
                <span class="pulse-dot"></span>
                <span>{"Powered by Advanced AI Models"}</span>
            </div>

            <h1>{"Skin Health"}<br /><span class="accent">{"Intelligence"}</span></h1>
            <p class="hero-subtitle">
                {"Upload a photo, describe your symptoms, and get an instant AI assessment \
                  of possible skin conditions. Then find a dermatologist near you."}
            </p>

            <div class="hero-features">
                { for features.iter().map(|(icon, text)| html! {
                    <div class="hero-feature">
                        <i class={classes!("fa-solid", *icon)}></i>
                        <span>{ *text }</span>
                    </div>
                })}
            </div>

            <a href="#analyze" class="hero-cta">
                {"Start Analysis "}<i class="fa-solid fa-arrow-down"></i>
            </a>
        </section>
    }
}
