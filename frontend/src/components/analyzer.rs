use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::{results, utils};
use crate::{Model, Msg};

pub fn render_analyzer(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section id="analyze" class="section analyzer-section">
            <div class="section-heading">
                <h2>{"AI Skin "}<span class="accent">{"Analysis"}</span></h2>
                <p class="section-subtitle">
                    {"Upload an image and describe your symptoms for AI-powered skin condition analysis"}
                </p>
            </div>

            <div class="analyzer-grid">
                <div class="card upload-card">
                    { render_upload_area(model, ctx) }
                    { render_symptoms_input(model, ctx) }
                    { render_analyze_button(model, ctx) }
                </div>

                { results::render_results(model) }
            </div>
        </section>
    }
}

fn render_upload_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let files = input.files();
        input.set_value("");

        files.map(|list| match utils::first_image_file(&list) {
            Some(file) => Msg::ImageSelected(file),
            None => Msg::ShowNotice(crate::Notice {
                title: "Invalid file".into(),
                detail: "Please upload an image file.".into(),
                kind: crate::NoticeKind::Destructive,
            }),
        })
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    match &model.image {
        Some(image) => html! {
            <div class="image-preview">
                <img src={image.preview_url.to_string()} alt="Uploaded skin image" />
                <button
                    class="clear-image-btn"
                    title="Remove this image"
                    onclick={link.callback(|_| Msg::ClearImage)}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
                {
                    if model.analyzing {
                        html! {
                            <div class="scan-overlay">
                                <i class="fa-solid fa-expand fa-2x"></i>
                                <p>{"Analyzing..."}</p>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        },
        None => html! {
            <>
                <input
                    type="file"
                    id="skin-image-input"
                    accept="image/*"
                    style="display: none;"
                    onchange={handle_change}
                />
                <label
                    for="skin-image-input"
                    class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                    ondragover={handle_drag_over}
                    ondragleave={handle_drag_leave}
                    ondrop={handle_drop}
                >
                    <i class="fa-solid fa-cloud-arrow-up fa-2x"></i>
                    <p>{"Drop your image here"}</p>
                    <p class="upload-hint">{"or click to browse, or paste from clipboard"}</p>
                </label>
            </>
        },
    }
}

fn render_symptoms_input(model: &Model, ctx: &Context<Model>) -> Html {
    let oninput = ctx.link().callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::SetSymptoms(textarea.value())
    });

    html! {
        <div class="symptoms-input">
            <label for="symptoms">{"Describe Your Symptoms"}</label>
            <textarea
                id="symptoms"
                value={model.symptoms.clone()}
                {oninput}
                placeholder="E.g., red itchy patches on arm, appeared 3 days ago, mild burning sensation..."
            />
        </div>
    }
}

fn render_analyze_button(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <button
            class="analyze-btn"
            disabled={model.analyzing}
            onclick={utils::debounce(300, {
                move || link.callback(|_| Msg::Analyze).emit(())
            })}
        >
            {
                if model.analyzing {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-expand"></i>{" Analyze Skin Condition"}</> }
                }
            }
        </button>
    }
}
