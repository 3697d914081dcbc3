use dioxus::prelude::*;

use fit_core::model::{DailyLog, FoodId, MealEntryId, MealKind};

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{FoodRowVm, macro_rows, meal_sections, meal_title};

const QUICK_ADD_LIMIT: usize = 8;

fn parse_servings(raw: &str) -> Result<f64, ViewError> {
    raw.trim().parse().map_err(|_| ViewError::Invalid)
}

#[component]
pub fn NutritionView() -> Element {
    let ctx = use_context::<AppContext>();
    let nutrition = ctx.nutrition();

    let mut log = use_signal(DailyLog::new);
    let mut search = use_signal(String::new);
    let mut meal = use_signal(|| MealKind::Breakfast);
    let mut servings = use_signal(|| "1".to_string());
    let mut error = use_signal(|| None::<ViewError>);

    let goals = nutrition.goals();
    let rows = macro_rows(&log.read(), &goals);
    let sections = meal_sections(&log.read());
    let results: Vec<FoodRowVm> = nutrition
        .search(&search.read())
        .iter()
        .map(FoodRowVm::from)
        .collect();
    let quick_add: Vec<FoodRowVm> = results.iter().take(QUICK_ADD_LIMIT).cloned().collect();
    let selected_title = meal_title(meal());

    let add_food = {
        let nutrition = nutrition.clone();
        move |food_id: FoodId| {
            let outcome = parse_servings(&servings.read()).and_then(|amount| {
                nutrition
                    .add_food(&mut log.write(), food_id, amount, meal())
                    .map_err(ViewError::from)
            });
            error.set(outcome.err());
        }
    };
    let remove_entry = {
        let nutrition = nutrition.clone();
        move |entry_id: MealEntryId| {
            let outcome = nutrition
                .remove_entry(&mut log.write(), entry_id)
                .map_err(ViewError::from);
            error.set(outcome.err());
        }
    };

    rsx! {
        div { class: "page",
            h2 { "Nutrition Tracker" }
            p { class: "muted", "Track your daily nutrition and reach your macro goals" }

            div { class: "card macros",
                h3 { "Daily Macros" }
                for row in rows {
                    div { class: "macro-row",
                        div { class: "macro-header",
                            span { "{row.label}" }
                            span { class: "muted", "{row.amount}" }
                        }
                        div { class: "progress",
                            div { class: "progress-fill", style: "width: {row.percent}%" }
                        }
                        p { class: "muted small", "{row.remaining}" }
                    }
                }
            }

            div { class: "card-grid meals",
                for section in sections {
                    div { key: "{section.title}", class: "card meal",
                        div { class: "card-header",
                            h4 { "{section.title}" }
                            span { class: "badge", "{section.calories}" }
                        }
                        if section.entries.is_empty() {
                            p { class: "muted", "No foods logged yet" }
                        } else {
                            ul {
                                for entry in section.entries {
                                    li { key: "{entry.id}",
                                        strong { "{entry.name}" }
                                        span { class: "muted", " {entry.detail}" }
                                        button {
                                            class: "btn btn-ghost",
                                            r#type: "button",
                                            onclick: {
                                                let mut remove_entry = remove_entry.clone();
                                                let id = entry.id;
                                                move |_| remove_entry(id)
                                            },
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: {
                                let kind = section.meal;
                                move |_| meal.set(kind)
                            },
                            "Add Food"
                        }
                    }
                }
            }

            div { class: "card food-search",
                h3 { "Add Food to {selected_title}" }
                if let Some(err) = error() {
                    p { class: "error", "{err.message()}" }
                }
                div { class: "filters",
                    input {
                        r#type: "search",
                        placeholder: "Search foods...",
                        value: "{search}",
                        oninput: move |evt| search.set(evt.value()),
                    }
                    label { "Servings"
                        input {
                            r#type: "number",
                            step: "0.5",
                            min: "0.5",
                            value: "{servings}",
                            oninput: move |evt| servings.set(evt.value()),
                        }
                    }
                }
                if results.is_empty() {
                    p { class: "muted", "No foods found" }
                } else {
                    ul { class: "food-results",
                        for food in results {
                            li { key: "{food.id}",
                                div {
                                    strong { "{food.name}" }
                                    p { class: "muted", "{food.headline}" }
                                    p { class: "muted small", "{food.detail}" }
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: {
                                        let mut add_food = add_food.clone();
                                        let id = food.id;
                                        move |_| add_food(id)
                                    },
                                    "Add"
                                }
                            }
                        }
                    }
                }
            }

            div { class: "card quick-add",
                h3 { "Quick Add" }
                div { class: "quick-add-grid",
                    for food in quick_add {
                        button {
                            key: "{food.id}",
                            class: "btn btn-secondary",
                            r#type: "button",
                            onclick: {
                                let mut add_food = add_food.clone();
                                let id = food.id;
                                move |_| add_food(id)
                            },
                            "{food.name}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn servings_must_parse() {
        assert_eq!(parse_servings(" 1.5 "), Ok(1.5));
        assert_eq!(parse_servings("lots"), Err(ViewError::Invalid));
    }
}
