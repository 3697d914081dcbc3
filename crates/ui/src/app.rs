use dioxus::prelude::*;
use dioxus_router::Router;

use fit_core::model::AppSettings;

use crate::context::AppContext;
use crate::routes::Route;

/// Reactive copy of the settings store, shared by every view.
///
/// Views that change settings write the store first, then this signal, so the
/// root re-renders its theme variables.
#[derive(Clone, Copy)]
pub struct ActiveSettings(pub Signal<AppSettings>);

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.settings();
    let active = use_context_provider(|| ActiveSettings(Signal::new(settings.current())));

    // Subscribe to the signal; the store holds the theme definitions.
    let current = active.0.read().clone();
    let css_vars = settings
        .theme()
        .map(|theme| theme.css_variables())
        .unwrap_or_default();
    let mut root_class = String::from("app-root");
    if current.compact_mode() {
        root_class.push_str(" compact");
    }
    if !current.animations() {
        root_class.push_str(" no-animations");
    }

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        // Stable OS/window title. Per-route titles are rendered inside the right pane.
        document::Title { "FitTrack" }

        div { class: "{root_class}", style: "{css_vars}",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
