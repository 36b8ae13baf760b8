use shared::DoctorRecord;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::utils::debounce;
use crate::{Model, Msg};

/// Which panel the results area shows. Kept as a pure selector so both
/// branches of the empty/grid split are directly testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultsView {
    Hidden,
    Empty,
    Grid,
}

pub fn results_view(has_searched: bool, searching: bool, doctor_count: usize) -> ResultsView {
    if doctor_count > 0 {
        ResultsView::Grid
    } else if has_searched && !searching {
        ResultsView::Empty
    } else {
        ResultsView::Hidden
    }
}

pub fn render_doctor_finder(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section id="doctors" class="section doctors-section">
            <div class="section-heading">
                <h2>{"Find a "}<span class="accent">{"Dermatologist"}</span></h2>
                <p class="section-subtitle">{"Search for dermatologists near you in India"}</p>
            </div>

            { render_search_form(model, ctx) }
            { render_results_area(model) }
        </section>
    }
}

fn render_search_form(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let on_pin_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetPinCode(input.value())
    });

    let on_city_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetCity(input.value())
    });

    let search_link = link.clone();

    html! {
        <div class="card search-card">
            <div class="search-fields">
                <div class="search-field">
                    <label for="pin-code">{"Pin Code"}</label>
                    <input
                        type="text"
                        id="pin-code"
                        value={model.pin_code.clone()}
                        oninput={on_pin_input}
                        placeholder="Enter 6-digit pin code"
                        maxlength="6"
                    />
                    <p class="field-hint">{"Indian pin codes (6 digits)"}</p>
                </div>
                <div class="search-field">
                    <label for="city">{"City Name"}</label>
                    <input
                        type="text"
                        id="city"
                        value={model.city.clone()}
                        oninput={on_city_input}
                        placeholder="Enter city name"
                    />
                </div>
            </div>

            <button
                class="analyze-btn"
                disabled={model.searching}
                onclick={debounce(300, {
                    move || search_link.callback(|_| Msg::SearchDoctors).emit(())
                })}
            >
                {
                    if model.searching {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Searching..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Find Dermatologists"}</> }
                    }
                }
            </button>
        </div>
    }
}

fn render_results_area(model: &Model) -> Html {
    match results_view(model.has_searched, model.searching, model.doctors.len()) {
        ResultsView::Hidden => html! {},
        ResultsView::Empty => html! {
            <div class="no-results">
                <i class="fa-solid fa-magnifying-glass fa-2x"></i>
                <h3>{"No Doctors Found"}</h3>
                <p>{"Try searching with a different pin code or city name in India"}</p>
            </div>
        },
        ResultsView::Grid => html! {
            <div class="doctor-grid">
                { for model.doctors.iter().map(render_doctor_card) }
            </div>
        },
    }
}

fn render_doctor_card(doctor: &DoctorRecord) -> Html {
    let address = if doctor.city.is_empty() {
        doctor.address.clone()
    } else {
        format!("{}, {}", doctor.address, doctor.city)
    };

    html! {
        <div class="card doctor-card">
            <h3>{ &doctor.name }</h3>
            <p class="doctor-specialty">{ &doctor.specialty }</p>

            {
                if let Some(rating) = doctor.rating {
                    html! {
                        <p class="doctor-rating">
                            <i class="fa-solid fa-star"></i>
                            { format!(" {:.1}", rating) }
                            {
                                if let Some(count) = doctor.review_count {
                                    html! { <span class="review-count">{ format!(" ({} reviews)", count) }</span> }
                                } else {
                                    html! {}
                                }
                            }
                        </p>
                    }
                } else {
                    html! {}
                }
            }

            <p class="doctor-address">
                <i class="fa-solid fa-location-dot"></i>{ format!(" {}", address) }
            </p>

            {
                if let Some(phone) = &doctor.phone {
                    html! { <p class="doctor-phone"><i class="fa-solid fa-phone"></i>{ format!(" {}", phone) }</p> }
                } else {
                    html! {}
                }
            }

            {
                match format_working_hours(doctor.working_hours.as_deref()) {
                    Some(hours) => html! {
                        <p class="doctor-hours"><i class="fa-solid fa-clock"></i>{ format!(" {}", hours) }</p>
                    },
                    None => html! {},
                }
            }

            {
                if let Some(link) = &doctor.google_maps_link {
                    html! {
                        <a class="maps-link" href={link.clone()} target="_blank" rel="noopener noreferrer">
                            <i class="fa-solid fa-arrow-up-right-from-square"></i>{" Get Location"}
                        </a>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Shows at most the first two working-hours entries.
fn format_working_hours(hours: Option<&[String]>) -> Option<String> {
    let hours = hours?;
    if hours.is_empty() {
        return None;
    }
    Some(hours.iter().take(2).cloned().collect::<Vec<_>>().join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_results_panel_only_after_a_settled_search() {
        assert_eq!(results_view(false, false, 0), ResultsView::Hidden);
        assert_eq!(results_view(true, true, 0), ResultsView::Hidden);
        assert_eq!(results_view(true, false, 0), ResultsView::Empty);
    }

    #[test]
    fn any_records_render_the_grid() {
        assert_eq!(results_view(true, false, 3), ResultsView::Grid);
        assert_eq!(results_view(true, true, 3), ResultsView::Grid);
    }

    #[test]
    fn working_hours_are_capped_at_two_entries() {
        assert_eq!(format_working_hours(None), None);
        assert_eq!(format_working_hours(Some(&[])), None);

        let hours = vec![
            "Mon 9-5".to_string(),
            "Tue 9-5".to_string(),
            "Wed 9-5".to_string(),
        ];
        assert_eq!(
            format_working_hours(Some(&hours)),
            Some("Mon 9-5, Tue 9-5".to_string())
        );
    }
}
