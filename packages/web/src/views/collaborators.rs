//! Collaborator search and connection requests for researchers.

use api::ApiClient;
use dioxus::prelude::*;
use ui::icons::FaMagnifyingGlass;
use ui::{use_app, use_page, AppStore, Icon, Loader, Toast};

type Controller = ui::pages::Collaborators<ApiClient, AppStore>;

#[component]
pub fn Collaborators() -> Element {
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
            h1 { "Collaborators" }
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
                placeholder: "Search by specialty",
                value: "{ctrl.search}",
                oninput: move |e| page.update(|p| p.search = e.value()),
            }
            button {
                r#type: "submit",
                class: "btn btn-secondary",
                Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
            }
        }

        if ctrl.incoming().next().is_some() {
            section {
                h2 { "Requests for you" }
                ul {
                    class: "record-list",
                    for request in ctrl.incoming() {
                        {
                            let id = request.id;
                            rsx! {
                                li {
                                    key: "{id}",
                                    span { "Researcher #{request.requester_id} wants to connect" }
                                    div {
                                        class: "row",
                                        button {
                                            class: "btn btn-primary",
                                            onclick: move |_| page.run(move |mut p| async move {
                                                p.answer(id, true).await;
                                                p
                                            }),
                                            "Accept"
                                        }
                                        button {
                                            class: "btn btn-secondary",
                                            onclick: move |_| page.run(move |mut p| async move {
                                                p.answer(id, false).await;
                                                p
                                            }),
                                            "Reject"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if ctrl.state.is_loading() {
            Loader {}
        } else if ctrl.collaborators.is_empty() {
            p { class: "empty", "No researchers found." }
        }

        div {
            class: "card-grid",
            for collaborator in ctrl.collaborators.iter() {
                {
                    let id = collaborator.id;
                    let status = ctrl.status_with(id).cloned();
                    rsx! {
                        div {
                            key: "{id}",
                            class: "card",
                            h3 { class: "card-title", "{collaborator.name}" }
                            if let Some(specialties) = &collaborator.specialties {
                                span { class: "badge", "{specialties}" }
                            }
                            if let Some(interests) = &collaborator.research_interests {
                                p { class: "card-body", "{interests}" }
                            }
                            div {
                                class: "card-actions",
                                if let Some(status) = &status {
                                    span { class: "status status-{status}", "{status}" }
                                } else {
                                    button {
                                        class: "btn btn-primary",
                                        onclick: move |_| page.run(move |mut p| async move {
                                            p.connect(id).await;
                                            p
                                        }),
                                        "Connect"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if ctrl.outgoing().next().is_some() {
            section {
                h2 { "Sent requests" }
                ul {
                    class: "record-list",
                    for request in ctrl.outgoing() {
                        {
                            let id = request.id;
                            rsx! {
                                li {
                                    key: "{id}",
                                    span { "Researcher #{request.receiver_id}" }
                                    span { class: "status status-{request.status}", "{request.status}" }
                                    button {
                                        class: "btn btn-link",
                                        onclick: move |_| page.run(move |mut p| async move {
                                            p.remove(id).await;
                                            p
                                        }),
                                        if request.status.is_pending() { "Withdraw" } else { "Remove" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
