use dioxus::prelude::*;

use fit_core::catalog::ExerciseFilter;
use fit_core::model::ExerciseCategory;

use crate::context::AppContext;
use crate::vm::{
    ALL_OPTION, ExerciseCardVm, parse_category_option, parse_muscle_option,
};

#[component]
pub fn ExercisesView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();

    let mut search = use_signal(String::new);
    let mut category = use_signal(|| ALL_OPTION.to_string());
    let mut muscle = use_signal(|| ALL_OPTION.to_string());

    let filter = ExerciseFilter {
        search: search.read().clone(),
        category: parse_category_option(&category.read()),
        muscle: parse_muscle_option(&muscle.read()),
    };
    let cards: Vec<ExerciseCardVm> = catalog
        .filter_exercises(&filter)
        .iter()
        .map(ExerciseCardVm::from)
        .collect();
    let muscles = catalog.muscle_labels();
    let count = cards.len();

    rsx! {
        div { class: "page",
            h2 { "Exercise Library" }
            p { class: "muted", "Comprehensive collection of exercises with detailed instructions" }

            div { class: "filters",
                input {
                    r#type: "search",
                    placeholder: "Search exercises...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                label { "Category"
                    select {
                        value: "{category}",
                        onchange: move |evt| category.set(evt.value()),
                        option { value: ALL_OPTION, "All" }
                        for kind in ExerciseCategory::ALL {
                            option { value: kind.as_str(), "{kind}" }
                        }
                    }
                }
                label { "Target Muscle"
                    select {
                        value: "{muscle}",
                        onchange: move |evt| muscle.set(evt.value()),
                        option { value: ALL_OPTION, "All" }
                        for label in muscles {
                            option { value: "{label}", "{label}" }
                        }
                    }
                }
            }

            p { class: "muted", "{count} exercises" }
            div { class: "card-grid",
                for card in cards {
                    div { key: "{card.id}", class: "card exercise-card",
                        div { class: "card-header",
                            h3 { "{card.name}" }
                            span { class: "badge", "{card.category}" }
                        }
                        p { class: "muted", "{card.prescription}" }
                        p { "{card.description}" }
                        div { class: "tags",
                            for muscle in card.muscles {
                                span { class: "tag", "{muscle}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
