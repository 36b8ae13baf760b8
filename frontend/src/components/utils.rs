use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use shared::SeverityLevel;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::FileList;
use yew::prelude::*;

use crate::{Model, Msg, NoticeKind};

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

pub fn first_image_file(file_list: &FileList) -> Option<GlooFile> {
    (0..file_list.length())
        .filter_map(|i| file_list.item(i))
        .find(|file| file.type_().starts_with("image/"))
        .map(GlooFile::from)
}

/// CSS class for the severity line on the results card.
pub fn severity_class(severity: &str) -> &'static str {
    match SeverityLevel::classify(severity) {
        SeverityLevel::High => "severity-high",
        SeverityLevel::Moderate => "severity-moderate",
        SeverityLevel::Low => "severity-low",
    }
}

pub fn render_notice(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(notice) = &model.notice else {
        return html! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Warning => "notice-warning",
        NoticeKind::Destructive => "notice-destructive",
    };

    html! {
        <div class={classes!("notice-toast", kind_class)}>
            <div class="notice-body">
                <p class="notice-title">{ &notice.title }</p>
                <p class="notice-detail">{ &notice.detail }</p>
            </div>
            <button
                class="notice-dismiss"
                onclick={ctx.link().callback(|_| Msg::DismissNotice)}
            >
                <i class="fa-solid fa-times"></i>
            </button>
        </div>
    }
}
