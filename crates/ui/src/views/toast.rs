use std::time::Duration;

use dioxus::prelude::*;

use services::{Notice, Severity};

use crate::context::AppContext;

const POLL: Duration = Duration::from_millis(250);
/// Polls a toast stays on screen (about four seconds).
const TOAST_POLLS: u32 = 16;

#[derive(Clone, Debug, PartialEq)]
struct Toast {
    id: u64,
    notice: Notice,
    polls_left: u32,
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "toast toast-success",
        Severity::Error => "toast toast-error",
        Severity::Info => "toast",
    }
}

/// Ages out shown toasts, then appends newly drained notices.
fn refresh(toasts: &mut Vec<Toast>, incoming: Vec<Notice>, next_id: &mut u64) {
    for toast in toasts.iter_mut() {
        toast.polls_left = toast.polls_left.saturating_sub(1);
    }
    toasts.retain(|toast| toast.polls_left > 0);
    for notice in incoming {
        *next_id += 1;
        toasts.push(Toast {
            id: *next_id,
            notice,
            polls_left: TOAST_POLLS,
        });
    }
}

#[component]
pub fn ToastHost() -> Element {
    let ctx = use_context::<AppContext>();
    let toasts = use_signal(Vec::<Toast>::new);

    use_future(move || {
        let notices = ctx.notices();
        let mut toasts = toasts;
        async move {
            let mut next_id = 0;
            loop {
                let incoming = notices.drain();
                let idle = incoming.is_empty() && toasts.peek().is_empty();
                if !idle {
                    refresh(&mut toasts.write(), incoming, &mut next_id);
                }
                tokio::time::sleep(POLL).await;
            }
        }
    });

    let shown = toasts.read().clone();

    rsx! {
        div { class: "toast-host",
            for toast in shown {
                div { key: "{toast.id}", class: severity_class(toast.notice.severity),
                    strong { "{toast.notice.title}" }
                    p { "{toast.notice.body}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_their_polls() {
        let mut toasts = Vec::new();
        let mut next_id = 0;
        refresh(
            &mut toasts,
            vec![Notice::success("Food Added", "Oats added to breakfast")],
            &mut next_id,
        );
        assert_eq!(toasts.len(), 1);

        for _ in 1..TOAST_POLLS {
            refresh(&mut toasts, Vec::new(), &mut next_id);
        }
        assert_eq!(toasts.len(), 1);
        refresh(&mut toasts, Vec::new(), &mut next_id);
        assert!(toasts.is_empty());
    }
}
