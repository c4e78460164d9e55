//! Patient dashboard: recommended trials and publications for the
//! patient's condition.

use api::ApiClient;
use dioxus::prelude::*;
use ui::{use_app, use_page, AppStore, Card, CardContent, Loader, Toast};

type Controller = ui::pages::PatientDashboard<ApiClient, AppStore>;

#[component]
pub fn PatientDashboard() -> Element {
    let app = use_app();
    let page = use_page(|| Controller::new(app.services()));

    use_hook(move || {
        page.run(|mut p| async move {
            p.activate().await;
            p
        })
    });

    let ctrl = page.state.read();
    let Some(user) = &ctrl.user else {
        return rsx! { Loader {} };
    };
    let condition = user.condition().unwrap_or("your condition").to_string();

    rsx! {
        Toast {
            notice: ctrl.notifier.current().cloned(),
            on_close: move |id| page.update(|p| { p.notifier.dismiss(id); }),
        }

        header {
            class: "page-header",
            h1 { "Welcome, {user.name}" }
            p { class: "subtitle", "Personalized for {condition}" }
        }

        if ctrl.state.is_loading() {
            Loader { text: "Finding trials and publications..." }
        }

        section {
            h2 { "Recommended clinical trials" }
            div {
                class: "row eligibility-age",
                label { "Your age" }
                input {
                    r#type: "number",
                    min: "0",
                    value: "{ctrl.age}",
                    oninput: move |e| page.update(|p| p.age = e.value()),
                }
            }
            if ctrl.trials.is_empty() && !ctrl.state.is_loading() {
                p { class: "empty", "No trials found for {condition}." }
            }
            div {
                class: "card-grid",
                for trial in ctrl.trials.iter() {
                    div {
                        key: "{trial.id}",
                        class: "card-slot",
                        Card {
                            content: CardContent::from(trial),
                            summary: ctrl.summaries.get(&trial.id).cloned(),
                            summarizing: ctrl.summarizing.as_deref() == Some(trial.id.as_str()),
                            on_summarize: move |id: String| page.run(move |mut p| async move {
                                p.summarize_trial(&id).await;
                                p
                            }),
                            on_save: move |id: String| page.update(|p| p.save_trial(&id)),
                        }
                        {
                            let id = trial.id.clone();
                            rsx! {
                                button {
                                    class: "btn btn-link",
                                    onclick: move |_| {
                                        let id = id.clone();
                                        page.run(move |mut p| async move {
                                            p.check_eligibility(&id).await;
                                            p
                                        })
                                    },
                                    "Check my eligibility"
                                }
                            }
                        }
                        if let Some(result) = ctrl.eligibility.get(&trial.id) {
                            div {
                                class: "eligibility",
                                strong { {verdict(result.is_eligible())} }
                                p { "{result.explanation}" }
                                if !result.confidence.is_empty() {
                                    span { class: "hint", "Confidence: {result.confidence}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        section {
            h2 { "Latest publications" }
            if ctrl.publications.is_empty() && !ctrl.state.is_loading() {
                p { class: "empty", "No publications found for {condition}." }
            }
            div {
                class: "card-grid",
                for publication in ctrl.visible_publications() {
                    Card {
                        key: "{publication.id}",
                        content: CardContent::from(publication),
                        summary: ctrl.summaries.get(&publication.id).cloned(),
                        summarizing: ctrl.summarizing.as_deref() == Some(publication.id.as_str()),
                        on_summarize: move |id: String| page.run(move |mut p| async move {
                            p.summarize_publication(&id).await;
                            p
                        }),
                        on_save: move |id: String| page.update(|p| p.save_publication(&id)),
                    }
                }
            }
        }
    }
}

fn verdict(eligible: Option<bool>) -> &'static str {
    match eligible {
        Some(true) => "Likely eligible",
        Some(false) => "Likely not eligible",
        None => "Eligibility unclear",
    }
}
