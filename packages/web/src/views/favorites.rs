//! Saved trials and publications.

use api::ApiClient;
use dioxus::prelude::*;
use store::SavedKind;
use ui::icons::FaArrowUpRightFromSquare;
use ui::{use_app, use_page, AppStore, Icon, Loader};

type Controller = ui::pages::Favorites<ApiClient, AppStore>;

#[component]
pub fn Favorites() -> Element {
    let app = use_app();
    let page = use_page(|| Controller::new(app.services()));

    use_hook(move || page.run(|mut p| async move {
        p.activate();
        p
    }));

    let ctrl = page.state.read();
    if ctrl.state.is_loading() {
        return rsx! { Loader {} };
    }
    let browse = ctrl.browse_route();

    rsx! {
        header {
            class: "page-header",
            h1 { "Favorites" }
        }

        if ctrl.items.is_empty() {
            div {
                class: "empty",
                p { "Nothing saved yet." }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| page.navigate(browse),
                    "Browse"
                }
            }
        }

        for (kind, heading) in [(SavedKind::Trial, "Trials"), (SavedKind::Publication, "Publications")] {
            if ctrl.of_kind(kind).next().is_some() {
                section {
                    key: "{heading}",
                    h2 { "{heading}" }
                    div {
                        class: "card-grid",
                        for item in ctrl.of_kind(kind) {
                            div {
                                key: "{item.id}",
                                class: "card",
                                div {
                                    class: "card-header",
                                    h3 { class: "card-title", "{item.title}" }
                                    if item.external {
                                        span { class: "card-source", "External" }
                                    }
                                }
                                if let Some(description) = &item.description {
                                    p { class: "card-body", "{description}" }
                                }
                                if let Some(url) = &item.url {
                                    a {
                                        class: "btn btn-link",
                                        href: "{url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "Open "
                                        Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
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
