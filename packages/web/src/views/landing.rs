//! Landing page: role choice, returning-user login and service status.

use api::ApiClient;
use dioxus::prelude::*;
use ui::pages::{dashboard_route, routes};
use ui::{use_app, use_page, AppStore, Loader, Toast};

type Controller = ui::pages::Landing<ApiClient, AppStore>;

#[component]
pub fn Landing() -> Element {
    let app = use_app();
    let page = use_page(|| Controller::new(app.services()));

    use_hook(move || {
        page.update(|p| p.activate());
        page.run(|mut p| async move {
            p.check_services().await;
            p
        });
    });

    let ctrl = page.state.read();
    if ctrl.state.is_loading() {
        return rsx! { Loader {} };
    }

    let ai_status = ctrl
        .ai_health
        .as_ref()
        .map(|h| h.status.clone())
        .unwrap_or_else(|| "unreachable".to_string());
    let services_status = ctrl
        .service_health
        .as_ref()
        .map(|h| h.status.clone())
        .unwrap_or_else(|| "unreachable".to_string());

    rsx! {
        Toast {
            notice: ctrl.notifier.current().cloned(),
            on_close: move |id| page.update(|p| { p.notifier.dismiss(id); }),
        }

        section {
            class: "hero",
            h1 { "CuraLink" }
            p { class: "subtitle", "Connecting patients and researchers around clinical trials." }

            if let Some(user) = &ctrl.user {
                {
                    let to = dashboard_route(user.role());
                    rsx! {
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| page.navigate(to),
                            "Continue as {user.name}"
                        }
                    }
                }
            } else {
                div {
                    class: "role-choice",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| page.navigate(routes::PATIENT_ONBOARD),
                        "I'm a Patient"
                    }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| page.navigate(routes::RESEARCHER_ONBOARD),
                        "I'm a Researcher"
                    }
                }
            }
        }

        section {
            class: "panel login",
            h2 { "Already have an account?" }
            input {
                r#type: "email",
                placeholder: "Email",
                value: "{ctrl.email}",
                oninput: move |e| page.update(|p| p.email = e.value()),
            }
            input {
                placeholder: "or name",
                value: "{ctrl.name}",
                oninput: move |e| page.update(|p| p.name = e.value()),
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| page.run(|mut p| async move {
                    p.login().await;
                    p
                }),
                "Log in"
            }
        }

        footer {
            class: "service-status",
            span { "AI service: {ai_status}" }
            span { "External data: {services_status}" }
        }
    }
}
