mod api;
mod components;

use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use shared::{AnalysisOutcome, DoctorRecord};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

use components::handlers;

// Models
#[derive(Clone)]
pub struct ImageData {
    pub file: GlooFile,
    pub preview_url: ObjectUrl,
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Destructive,
}

#[derive(Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub detail: String,
    pub kind: NoticeKind,
}

// Yew msg components
pub enum Msg {
    // Image upload
    ImageSelected(GlooFile),
    ClearImage,
    SetDragging(bool),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),

    // Analysis flow
    SetSymptoms(String),
    Analyze,
    AnalysisDone(AnalysisOutcome),

    // Doctor finder
    SetPinCode(String),
    SetCity(String),
    SearchDoctors,
    DoctorsFound(Vec<DoctorRecord>),
    SearchFailed(String),

    // UI states
    ShowNotice(Notice),
    DismissNotice,
    ToggleTheme,
}

// Main component
pub struct Model {
    // Analyzer state
    pub image: Option<ImageData>,
    pub symptoms: String,
    pub analyzing: bool,
    pub analysis: Option<AnalysisOutcome>,

    // Doctor finder state
    pub pin_code: String,
    pub city: String,
    pub searching: bool,
    pub doctors: Vec<DoctorRecord>,
    pub has_searched: bool,

    // UI state
    pub notice: Option<Notice>,
    pub notice_timeout: Option<Timeout>,
    pub is_dragging: bool,
    pub theme: String,
    pub paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let theme: String = LocalStorage::get("theme").unwrap_or_else(|_| "dark".to_string());
        handlers::apply_theme(&theme);

        let mut model = Self {
            image: None,
            symptoms: String::new(),
            analyzing: false,
            analysis: None,
            pin_code: String::new(),
            city: String::new(),
            searching: false,
            doctors: Vec::new(),
            has_searched: false,
            notice: None,
            notice_timeout: None,
            is_dragging: false,
            theme,
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image upload
            Msg::ImageSelected(file) => handlers::handle_image_selected(self, file),
            Msg::ClearImage => handlers::handle_clear_image(self),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),

            // Analysis flow
            Msg::SetSymptoms(symptoms) => {
                self.symptoms = symptoms;
                false
            }
            Msg::Analyze => handlers::handle_analyze(self, ctx),
            Msg::AnalysisDone(outcome) => handlers::handle_analysis_done(self, ctx, outcome),

            // Doctor finder
            Msg::SetPinCode(raw) => {
                self.pin_code = shared::normalize_pin_code(&raw);
                true
            }
            Msg::SetCity(city) => {
                self.city = city;
                false
            }
            Msg::SearchDoctors => handlers::handle_search_doctors(self, ctx),
            Msg::DoctorsFound(doctors) => handlers::handle_doctors_found(self, ctx, doctors),
            Msg::SearchFailed(message) => handlers::handle_search_failed(self, ctx, message),

            // UI states
            Msg::ShowNotice(notice) => handlers::handle_show_notice(self, ctx, notice),
            Msg::DismissNotice => {
                self.notice = None;
                self.notice_timeout = None;
                true
            }
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                { components::navbar::render_navbar(self, ctx) }

                <main class="main-content">
                    { components::hero::render_hero() }
                    { components::analyzer::render_analyzer(self, ctx) }
                    { components::doctors::render_doctor_finder(self, ctx) }
                </main>

                { components::utils::render_notice(self, ctx) }
                { components::footer::render_footer() }
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Dermbot app starting...");
    yew::Renderer::<Model>::new().render();
}
