use yew::prelude::*;

use super::utils::severity_class;
use crate::Model;

pub fn render_results(model: &Model) -> Html {
    let Some(outcome) = &model.analysis else {
        return render_placeholder();
    };

    let result = outcome.result();

    html! {
        <div class="card results-card">
            <div class="results-header">
                <h3><i class="fa-solid fa-circle-check"></i>{" Analysis Results"}</h3>
                {
                    if outcome.is_demo() {
                        html! { <span class="demo-badge">{"Demo Mode"}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>

            <div class="primary-result">
                <p class="result-label">{"Detected Condition"}</p>
                <p class="condition-name">{ &result.condition }</p>
                <div class="result-meta">
                    <span>
                        {"Confidence: "}<strong>{ format!("{}%", result.confidence) }</strong>
                    </span>
                    <span class={severity_class(&result.severity)}>
                        {"Severity: "}<strong>{ &result.severity }</strong>
                    </span>
                </div>
            </div>

            <div class="symptom-analysis">
                <h4>{"AI Analysis"}</h4>
                <p>{ &result.symptom_analysis }</p>
            </div>

            <div class="top-predictions">
                <h4>{"Top Predictions"}</h4>
                { for result.predictions.iter().take(3).map(|pred| html! {
                    <div class="prediction-row">
                        <span class="prediction-disease">{ &pred.disease }</span>
                        <span class="prediction-confidence">
                            { format!("{:.1}%", pred.confidence * 100.0) }
                        </span>
                    </div>
                })}
            </div>

            <div class="recommendations">
                <p class="recommendations-title">
                    <i class="fa-solid fa-triangle-exclamation"></i>{" Important Notice"}
                </p>
                <ul>
                    { for result.recommendations.iter().map(|rec| html! {
                        <li>{ rec }</li>
                    })}
                </ul>
            </div>
        </div>
    }
}

fn render_placeholder() -> Html {
    html! {
        <div class="card results-card placeholder">
            <i class="fa-solid fa-camera fa-3x"></i>
            <h3>{"Ready to Analyze"}</h3>
            <p>
                {"Upload a clear image of the affected skin area and describe your \
                  symptoms to get started"}
            </p>
        </div>
    }
}
