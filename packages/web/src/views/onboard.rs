//! Patient and researcher signup forms.

use api::ApiClient;
use dioxus::prelude::*;
use ui::pages::onboard::{ContactForm, MIN_SYMPTOMS_LEN};
use ui::{use_app, use_page, AppStore, Page, PageHandle, Toast};

type PatientController = ui::pages::PatientOnboard<ApiClient, AppStore>;
type ResearcherController = ui::pages::ResearcherOnboard<ApiClient, AppStore>;

/// Name, email and location inputs shared by both forms.
fn contact_fields<C: Page>(
    page: PageHandle<C>,
    contact: &ContactForm,
    form: fn(&mut C) -> &mut ContactForm,
) -> Element {
    rsx! {
        label { "Name *" }
        input {
            value: "{contact.name}",
            oninput: move |e| page.update(|p| form(p).name = e.value()),
        }
        label { "Email" }
        input {
            r#type: "email",
            value: "{contact.email}",
            oninput: move |e| page.update(|p| form(p).email = e.value()),
        }
        div {
            class: "row",
            input {
                placeholder: "City",
                value: "{contact.city}",
                oninput: move |e| page.update(|p| form(p).city = e.value()),
            }
            input {
                placeholder: "Country",
                value: "{contact.country}",
                oninput: move |e| page.update(|p| form(p).country = e.value()),
            }
        }
        input {
            placeholder: "Location (optional)",
            value: "{contact.location}",
            oninput: move |e| page.update(|p| form(p).location = e.value()),
        }
    }
}

#[component]
pub fn PatientOnboard() -> Element {
    let app = use_app();
    let page = use_page(|| PatientController::new(app.services()));
    let ctrl = page.state.read();

    rsx! {
        Toast {
            notice: ctrl.notifier.current().cloned(),
            on_close: move |id| page.update(|p| { p.notifier.dismiss(id); }),
        }

        form {
            class: "panel onboard",
            onsubmit: move |e| {
                e.prevent_default();
                page.run(|mut p| async move {
                    p.submit().await;
                    p
                });
            },
            h1 { "Patient profile" }

            {contact_fields(page, &ctrl.contact, |p| &mut p.contact)}

            label { "Describe your symptoms" }
            textarea {
                rows: 4,
                value: "{ctrl.symptoms}",
                oninput: move |e| page.update(|p| p.symptoms = e.value()),
            }
            div {
                class: "row",
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    disabled: ctrl.analyzing,
                    onclick: move |_| page.run(|mut p| async move {
                        p.analyze_symptoms().await;
                        p
                    }),
                    if ctrl.analyzing { "Analyzing..." } else { "Detect condition with AI" }
                }
                span { class: "hint", "At least {MIN_SYMPTOMS_LEN} characters" }
            }
            if let Some(suggestion) = &ctrl.suggestion {
                p { class: "suggestion", "AI suggestion: {suggestion}" }
            }

            label { "Condition *" }
            input {
                value: "{ctrl.condition}",
                oninput: move |e| page.update(|p| p.condition = e.value()),
            }

            button { r#type: "submit", class: "btn btn-primary", "Create account" }
        }
    }
}

#[component]
pub fn ResearcherOnboard() -> Element {
    let app = use_app();
    let page = use_page(|| ResearcherController::new(app.services()));
    let ctrl = page.state.read();

    rsx! {
        Toast {
            notice: ctrl.notifier.current().cloned(),
            on_close: move |id| page.update(|p| { p.notifier.dismiss(id); }),
        }

        form {
            class: "panel onboard",
            onsubmit: move |e| {
                e.prevent_default();
                page.run(|mut p| async move {
                    p.submit().await;
                    p
                });
            },
            h1 { "Researcher profile" }

            {contact_fields(page, &ctrl.contact, |p| &mut p.contact)}

            label { "Specialties *" }
            input {
                placeholder: "Endocrinology, Oncology",
                value: "{ctrl.specialties}",
                oninput: move |e| page.update(|p| p.specialties = e.value()),
            }
            label { "Research interests *" }
            textarea {
                rows: 3,
                value: "{ctrl.research_interests}",
                oninput: move |e| page.update(|p| p.research_interests = e.value()),
            }
            label { "ORCID iD" }
            input {
                placeholder: "0000-0000-0000-0000",
                value: "{ctrl.orcid}",
                oninput: move |e| page.update(|p| p.orcid = e.value()),
            }
            label { "ResearchGate URL" }
            input {
                value: "{ctrl.researchgate_url}",
                oninput: move |e| page.update(|p| p.researchgate_url = e.value()),
            }
            label { "Bio" }
            textarea {
                rows: 3,
                value: "{ctrl.bio}",
                oninput: move |e| page.update(|p| p.bio = e.value()),
            }
            label {
                class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: ctrl.meeting_availability,
                    onchange: move |e| page.update(|p| p.meeting_availability = e.checked()),
                }
                "Available for meetings with patients"
            }

            button { r#type: "submit", class: "btn btn-primary", "Create account" }
        }
    }
}
