use dioxus::prelude::*;

use services::{Notice, Notifier};

use crate::context::AppContext;
use crate::vm::{SocialTab, challenges, friends, leaderboard};

#[component]
pub fn SocialView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut tab = use_signal(|| SocialTab::Friends);
    let mut joined = use_signal(|| {
        challenges()
            .iter()
            .map(|challenge| challenge.joined)
            .collect::<Vec<_>>()
    });

    let join = {
        let notices = ctx.notices();
        move |index: usize| {
            let mut flags = joined.write();
            let Some(flag) = flags.get_mut(index) else {
                return;
            };
            *flag = true;
            notices.notify(Notice::success(
                "Challenge Joined!",
                "You've successfully joined the challenge. Good luck!",
            ));
        }
    };

    let rows = challenges()
        .into_iter()
        .zip(joined.read().iter().copied())
        .map(|(mut challenge, flag)| {
            challenge.joined = flag;
            challenge
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page",
            h2 { "Social Hub" }
            p { class: "muted", "Connect with friends and join fitness challenges" }

            div { class: "tabs",
                for option in SocialTab::ALL {
                    button {
                        class: if tab() == option { "btn btn-primary" } else { "btn btn-ghost" },
                        r#type: "button",
                        onclick: move |_| tab.set(option),
                        "{option.label()}"
                    }
                }
            }

            match tab() {
                SocialTab::Friends => rsx! {
                    div { class: "card-grid",
                        for friend in friends() {
                            div { key: "{friend.name}", class: "card",
                                div { class: "card-header",
                                    h4 { "{friend.name}" }
                                    span { class: if friend.online { "badge online" } else { "badge" },
                                        if friend.online { "Online" } else { "Offline" }
                                    }
                                }
                                p { class: "muted", "{friend.streak} day streak" }
                                p { "{friend.weekly} workouts this week • {friend.total} total" }
                            }
                        }
                    }
                },
                SocialTab::Challenges => rsx! {
                    div { class: "card-grid",
                        for (index, challenge) in rows.into_iter().enumerate() {
                            div { key: "{challenge.name}", class: "card",
                                h4 { "{challenge.name}" }
                                p { class: "muted", "{challenge.description}" }
                                div { class: "progress",
                                    div { class: "progress-fill", style: "width: {challenge.percent()}%" }
                                }
                                p { class: "muted small",
                                    "{challenge.current}/{challenge.target} • {challenge.participants} participants"
                                }
                                if challenge.joined {
                                    span { class: "badge", "Joined" }
                                } else {
                                    button {
                                        class: "btn btn-primary",
                                        r#type: "button",
                                        onclick: {
                                            let mut join = join.clone();
                                            move |_| join(index)
                                        },
                                        "Join Challenge"
                                    }
                                }
                            }
                        }
                    }
                },
                SocialTab::Leaderboard => rsx! {
                    ol { class: "leaderboard",
                        for leader in leaderboard() {
                            li { key: "{leader.rank}", class: if leader.is_you { "you" } else { "" },
                                span { class: "rank", "#{leader.rank}" }
                                strong { " {leader.name}" }
                                span { class: "muted", " {leader.points} pts" }
                            }
                        }
                    }
                },
            }
        }
    }
}
