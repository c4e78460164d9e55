//! Health experts directory for patients.

use api::ApiClient;
use dioxus::prelude::*;
use ui::icons::FaMagnifyingGlass;
use ui::{use_app, use_page, AppStore, Icon, Loader, Toast};

type Controller = ui::pages::HealthExperts<ApiClient, AppStore>;

#[component]
pub fn HealthExperts() -> Element {
    let app = use_app();
    let page = use_page(|| Controller::new(app.services()));

    use_hook(move || {
        page.run(|mut p| async move {
            p.activate().await;
            p
        })
    });

    let ctrl = page.state.read();
    if ctrl.user.is_none() {
        return rsx! { Loader {} };
    }

    rsx! {
        Toast {
            notice: ctrl.notifier.current().cloned(),
            on_close: move |id| page.update(|p| { p.notifier.dismiss(id); }),
        }

        header {
            class: "page-header",
            h1 { "Health experts" }
        }

        form {
            class: "search",
            onsubmit: move |e| {
                e.prevent_default();
                page.run(|mut p| async move {
                    p.search().await;
                    p
                });
            },
            input {
                placeholder: "Search by condition",
                value: "{ctrl.search}",
                oninput: move |e| page.update(|p| p.search = e.value()),
            }
            button {
                r#type: "submit",
                class: "btn btn-secondary",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
            button {
                r#type: "button",
                class: "btn btn-primary",
                disabled: ctrl.matching,
                onclick: move |_| page.run(|mut p| async move {
                    p.match_specialties().await;
                    p
                }),
                if ctrl.matching { "Matching..." } else { "Which specialists fit me?" }
            }
        }

        if let Some(recommendation) = &ctrl.recommendation {
            div {
                class: "panel recommendation",
                h3 { "Recommended specialties" }
                p { strong { "{recommendation.recommended_specialties}" } }
                p { "{recommendation.explanation}" }
            }
        }

        if ctrl.state.is_loading() {
            Loader { text: "Loading experts..." }
        } else if ctrl.experts.is_empty() {
            p { class: "empty", "No experts found." }
        }

        div {
            class: "card-grid",
            for expert in ctrl.experts.iter() {
                {
                    let id = expert.id;
                    let can_meet = ctrl.can_request_meeting(id);
                    rsx! {
                        div {
                            key: "{id}",
                            class: "card",
                            h3 { class: "card-title", "{expert.name}" }
                            if let Some(specialties) = &expert.specialties {
                                span { class: "badge", "{specialties}" }
                            }
                            if let Some(location) = &expert.location {
                                span { class: "badge", "{location}" }
                            }
                            if let Some(bio) = &expert.bio {
                                p { class: "card-body", "{bio}" }
                            }
                            div {
                                class: "card-actions",
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| page.run(move |mut p| async move {
                                        p.follow(id).await;
                                        p
                                    }),
                                    "Follow"
                                }
                                if can_meet {
                                    button {
                                        class: "btn btn-primary",
                                        onclick: move |_| page.update(|p| p.open_meeting_form(id)),
                                        "Request meeting"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(form) = &ctrl.meeting_form {
            div {
                class: "modal-backdrop",
                form {
                    class: "panel modal",
                    onsubmit: move |e| {
                        e.prevent_default();
                        page.run(|mut p| async move {
                            p.request_meeting().await;
                            p
                        });
                    },
                    h3 { "Request a meeting" }
                    textarea {
                        placeholder: "Message",
                        rows: 4,
                        value: "{form.message}",
                        oninput: move |e| page.update(|p| {
                            if let Some(form) = p.meeting_form.as_mut() {
                                form.message = e.value();
                            }
                        }),
                    }
                    input {
                        placeholder: "How can the expert reach you?",
                        value: "{form.contact_info}",
                        oninput: move |e| page.update(|p| {
                            if let Some(form) = p.meeting_form.as_mut() {
                                form.contact_info = e.value();
                            }
                        }),
                    }
                    div {
                        class: "row",
                        button { r#type: "submit", class: "btn btn-primary", "Send request" }
                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            onclick: move |_| page.update(|p| p.close_meeting_form()),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}
