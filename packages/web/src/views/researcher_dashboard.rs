//! Researcher dashboard: own trials and publications, incoming meeting
//! requests and ORCID import.

use api::models::Phase;
use api::ApiClient;
use dioxus::prelude::*;
use ui::icons::{FaPlus, FaTrash};
use ui::{use_app, use_page, AppStore, Icon, Loader, Toast};

type Controller = ui::pages::ResearcherDashboard<ApiClient, AppStore>;

#[component]
pub fn ResearcherDashboard() -> Element {
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

    rsx! {
        Toast {
            notice: ctrl.notifier.current().cloned(),
            on_close: move |id| page.update(|p| { p.notifier.dismiss(id); }),
        }

        header {
            class: "page-header",
            h1 { "Welcome, {user.name}" }
        }

        if ctrl.state.is_loading() {
            Loader {}
        }

        section {
            div {
                class: "section-header",
                h2 { "My clinical trials" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| page.update(|p| p.show_trial_form = !p.show_trial_form),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " New trial"
                }
            }
            if ctrl.show_trial_form {
                form {
                    class: "panel",
                    onsubmit: move |e| {
                        e.prevent_default();
                        page.run(|mut p| async move {
                            p.create_trial().await;
                            p
                        });
                    },
                    input {
                        placeholder: "Title *",
                        value: "{ctrl.trial_form.title}",
                        oninput: move |e| page.update(|p| p.trial_form.title = e.value()),
                    }
                    input {
                        placeholder: "Condition *",
                        value: "{ctrl.trial_form.condition}",
                        oninput: move |e| page.update(|p| p.trial_form.condition = e.value()),
                    }
                    select {
                        value: "{ctrl.trial_form.phase}",
                        onchange: move |e| page.update(|p| p.trial_form.phase = Phase::from(e.value())),
                        for phase in Phase::ALL {
                            option { value: "{phase}", "{phase}" }
                        }
                    }
                    input {
                        placeholder: "Location *",
                        value: "{ctrl.trial_form.location}",
                        oninput: move |e| page.update(|p| p.trial_form.location = e.value()),
                    }
                    textarea {
                        placeholder: "Description",
                        rows: 3,
                        value: "{ctrl.trial_form.description}",
                        oninput: move |e| page.update(|p| p.trial_form.description = e.value()),
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Create trial" }
                }
            }
            if ctrl.trials.is_empty() {
                p { class: "empty", "You have not published any trials yet." }
            }
            ul {
                class: "record-list",
                for trial in ctrl.trials.iter() {
                    {
                        let id = trial.id;
                        rsx! {
                            li {
                                key: "{id}",
                                div {
                                    strong { "{trial.title}" }
                                    span { class: "badge", "{trial.phase}" }
                                    span { class: "hint", "{trial.condition} · {trial.location}" }
                                }
                                button {
                                    class: "btn btn-icon",
                                    title: "Delete trial",
                                    onclick: move |_| page.run(move |mut p| async move {
                                        p.delete_trial(id).await;
                                        p
                                    }),
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }

        section {
            div {
                class: "section-header",
                h2 { "My publications" }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| page.update(|p| p.show_publication_form = !p.show_publication_form),
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " New publication"
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| page.run(|mut p| async move {
                        p.load_orcid().await;
                        p
                    }),
                    "Import from ORCID"
                }
            }
            if ctrl.show_publication_form {
                form {
                    class: "panel",
                    onsubmit: move |e| {
                        e.prevent_default();
                        page.run(|mut p| async move {
                            p.create_publication().await;
                            p
                        });
                    },
                    input {
                        placeholder: "Title *",
                        value: "{ctrl.publication_form.title}",
                        oninput: move |e| page.update(|p| p.publication_form.title = e.value()),
                    }
                    textarea {
                        placeholder: "Summary *",
                        rows: 4,
                        value: "{ctrl.publication_form.summary}",
                        oninput: move |e| page.update(|p| p.publication_form.summary = e.value()),
                    }
                    button { r#type: "submit", class: "btn btn-primary", "Create publication" }
                }
            }
            if let Some(orcid) = &ctrl.orcid {
                div {
                    class: "panel orcid",
                    h3 { "Works on ORCID {orcid.orcid_id}" }
                    if orcid.publications.is_empty() {
                        p { class: "empty", "No works found." }
                    }
                    ul {
                        for (index, work) in orcid.publications.iter().enumerate() {
                            li {
                                key: "{index}",
                                span { "{work.title}" }
                                if let Some(journal) = &work.journal {
                                    span { class: "hint", " {journal}" }
                                }
                                if let Some(year) = &work.year {
                                    span { class: "hint", " ({year})" }
                                }
                                button {
                                    class: "btn btn-link",
                                    onclick: move |_| page.run(move |mut p| async move {
                                        p.import_orcid_work(index).await;
                                        p
                                    }),
                                    "Import"
                                }
                            }
                        }
                    }
                }
            }
            if ctrl.publications.is_empty() {
                p { class: "empty", "You have not published any publications yet." }
            }
            ul {
                class: "record-list",
                for publication in ctrl.publications.iter() {
                    {
                        let id = publication.id;
                        rsx! {
                            li {
                                key: "{id}",
                                div {
                                    strong { "{publication.title}" }
                                    p { class: "hint", "{publication.summary}" }
                                }
                                button {
                                    class: "btn btn-icon",
                                    title: "Delete publication",
                                    onclick: move |_| page.run(move |mut p| async move {
                                        p.delete_publication(id).await;
                                        p
                                    }),
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }
        }

        section {
            h2 { "Meeting requests" }
            if ctrl.pending_meetings().next().is_none() {
                p { class: "empty", "No pending meeting requests." }
            }
            ul {
                class: "record-list",
                for meeting in ctrl.pending_meetings() {
                    {
                        let id = meeting.id;
                        rsx! {
                            li {
                                key: "{id}",
                                div {
                                    strong { "Patient #{meeting.requester_id}" }
                                    if let Some(message) = &meeting.message {
                                        p { "{message}" }
                                    }
                                    if let Some(contact) = &meeting.contact_info {
                                        span { class: "hint", "Contact: {contact}" }
                                    }
                                }
                                div {
                                    class: "row",
                                    button {
                                        class: "btn btn-primary",
                                        onclick: move |_| page.run(move |mut p| async move {
                                            p.answer_meeting(id, true).await;
                                            p
                                        }),
                                        "Accept"
                                    }
                                    button {
                                        class: "btn btn-secondary",
                                        onclick: move |_| page.run(move |mut p| async move {
                                            p.answer_meeting(id, false).await;
                                            p
                                        }),
                                        "Decline"
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
