use js_sys::Date;
use yew::prelude::*;

pub fn render_footer() -> Html {
    let year = Date::new_0().get_full_year();

    html! {
        <footer id="about" class="app-footer">
            <div class="footer-columns">
                <div>
                    <a href="#home" class="brand">
                        <i class="fa-solid fa-wave-square"></i>
                        <span>{"Dermbot"}</span>
                    </a>
                    <p>
                        {"AI-powered skin condition analysis using state-of-the-art machine \
                          learning models. Not a replacement for professional medical advice."}
                    </p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul>
                        <li><a href="#home">{"Home"}</a></li>
                        <li><a href="#analyze">{"Skin Analysis"}</a></li>
                        <li><a href="#doctors">{"Find Doctor"}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Medical Disclaimer"}</h4>
                    <p>
                        {"This tool provides educational information only. It is not intended \
                          as a substitute for professional medical advice, diagnosis, or \
                          treatment."}
                    </p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>{ format!("© {} Dermbot. All rights reserved.", year) }</p>
                <p>{"Fullstack Rust WASM Demo"}</p>
            </div>
        </footer>
    }
}
