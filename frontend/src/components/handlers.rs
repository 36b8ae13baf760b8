use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;
use shared::{
    validate_analysis_inputs, validate_doctor_query, AnalysisOutcome, DoctorQuery, DoctorRecord,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

use crate::api;
use crate::{ImageData, Model, Msg, Notice, NoticeKind};

pub fn handle_image_selected(model: &mut Model, file: GlooFile) -> bool {
    let preview_url = ObjectUrl::from(file.clone());
    model.image = Some(ImageData { file, preview_url });
    model.analysis = None;
    true
}

pub fn handle_clear_image(model: &mut Model) -> bool {
    model.image = None;
    model.analysis = None;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(ctx, file_list);
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            event.prevent_default();
            process_file_list(ctx, file_list);
            return true;
        }
    }
    false
}

/// Takes the first image file from a drop/paste/file-input list; anything
/// else is refused with a notice.
pub fn process_file_list(ctx: &Context<Model>, file_list: FileList) {
    match super::utils::first_image_file(&file_list) {
        Some(file) => ctx.link().send_message(Msg::ImageSelected(file)),
        None => ctx.link().send_message(Msg::ShowNotice(Notice {
            title: "Invalid file".into(),
            detail: "Please upload an image file.".into(),
            kind: NoticeKind::Destructive,
        })),
    }
}

/// Submission gate for the analyze form. Preconditions are checked before
/// any network activity; a violation surfaces a notice and nothing is sent.
pub fn handle_analyze(model: &mut Model, ctx: &Context<Model>) -> bool {
    if let Err(err) = validate_analysis_inputs(model.image.is_some(), &model.symptoms) {
        ctx.link().send_message(Msg::ShowNotice(Notice {
            title: "Cannot analyze yet".into(),
            detail: err.to_string(),
            kind: NoticeKind::Destructive,
        }));
        return false;
    }

    let Some(image) = model.image.as_ref() else {
        return false;
    };

    model.analyzing = true;
    let file = image.file.clone();
    let symptoms = model.symptoms.clone();
    let link = ctx.link().clone();

    spawn_local(async move {
        let outcome = api::run_analysis(&file, &symptoms).await;
        link.send_message(Msg::AnalysisDone(outcome));
    });

    true
}

pub fn handle_analysis_done(
    model: &mut Model,
    ctx: &Context<Model>,
    outcome: AnalysisOutcome,
) -> bool {
    model.analyzing = false;

    let notice = match &outcome {
        AnalysisOutcome::Remote(result) => Notice {
            title: "Analysis Complete".into(),
            detail: format!(
                "Detected: {} ({}% confidence)",
                result.condition, result.confidence
            ),
            kind: NoticeKind::Success,
        },
        AnalysisOutcome::Demo { reason, .. } => Notice {
            title: "Demo Mode Active".into(),
            detail: format!("{}. Showing demo analysis instead.", reason),
            kind: NoticeKind::Warning,
        },
    };

    model.analysis = Some(outcome);
    ctx.link().send_message(Msg::ShowNotice(notice));
    true
}

/// Submission gate for the doctor search form: at least one location field.
pub fn handle_search_doctors(model: &mut Model, ctx: &Context<Model>) -> bool {
    if let Err(err) = validate_doctor_query(&model.pin_code, &model.city) {
        ctx.link().send_message(Msg::ShowNotice(Notice {
            title: "Location required".into(),
            detail: err.to_string(),
            kind: NoticeKind::Destructive,
        }));
        return false;
    }

    model.searching = true;
    model.has_searched = true;

    let query = DoctorQuery {
        pin_code: model.pin_code.clone(),
        city: model.city.clone(),
    };
    let link = ctx.link().clone();

    spawn_local(async move {
        match api::find_doctors(&query).await {
            Ok(doctors) => link.send_message(Msg::DoctorsFound(doctors)),
            Err(message) => link.send_message(Msg::SearchFailed(message)),
        }
    });

    true
}

pub fn handle_doctors_found(
    model: &mut Model,
    ctx: &Context<Model>,
    doctors: Vec<DoctorRecord>,
) -> bool {
    model.searching = false;

    let notice = if doctors.is_empty() {
        Notice {
            title: "No Results".into(),
            detail: "No dermatologists found in this area. Try a different location.".into(),
            kind: NoticeKind::Destructive,
        }
    } else {
        Notice {
            title: "Doctors Found".into(),
            detail: format!("Found {} dermatologists in your area.", doctors.len()),
            kind: NoticeKind::Success,
        }
    };

    model.doctors = doctors;
    ctx.link().send_message(Msg::ShowNotice(notice));
    true
}

pub fn handle_search_failed(model: &mut Model, ctx: &Context<Model>, message: String) -> bool {
    log::warn!("Doctor search failed: {}", message);

    model.searching = false;
    model.doctors.clear();
    ctx.link().send_message(Msg::ShowNotice(Notice {
        title: "Search Failed".into(),
        detail: "Unable to search for doctors. Please try again.".into(),
        kind: NoticeKind::Destructive,
    }));
    true
}

pub fn handle_show_notice(model: &mut Model, ctx: &Context<Model>, notice: Notice) -> bool {
    model.notice = Some(notice);

    let link = ctx.link().clone();
    let timeout = Timeout::new(5000, move || {
        link.send_message(Msg::DismissNotice);
    });
    model.notice_timeout = Some(timeout);

    true
}

pub fn apply_theme(theme: &str) {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
    if theme == "dark" {
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        body.class_list().remove_1("dark-mode").unwrap();
    }
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = if model.theme == "dark" {
        "light".to_string()
    } else {
        "dark".to_string()
    };

    apply_theme(&model.theme);
    LocalStorage::set("theme", &model.theme).ok();
    true
}
