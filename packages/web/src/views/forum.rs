//! Community forum.

use api::ApiClient;
use dioxus::prelude::*;
use ui::icons::FaTrash;
use ui::{use_app, use_page, AppStore, Icon, Loader, Toast};

type Controller = ui::pages::Forum<ApiClient, AppStore>;

#[component]
pub fn Forum() -> Element {
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
    let category = ctrl.filter.category.clone().unwrap_or_default();
    let questions_only = ctrl.filter.is_question == Some(true);

    rsx! {
        Toast {
            notice: ctrl.notifier.current().cloned(),
            on_close: move |id| page.update(|p| { p.notifier.dismiss(id); }),
        }

        header {
            class: "page-header",
            h1 { "Community forum" }
        }

        form {
            class: "panel composer",
            onsubmit: move |e| {
                e.prevent_default();
                page.run(|mut p| async move {
                    p.submit_post().await;
                    p
                });
            },
            input {
                placeholder: "Title (optional)",
                value: "{ctrl.draft.title}",
                oninput: move |e| page.update(|p| p.draft.title = e.value()),
            }
            textarea {
                placeholder: "Share something with the community",
                rows: 3,
                value: "{ctrl.draft.content}",
                oninput: move |e| page.update(|p| p.draft.content = e.value()),
            }
            div {
                class: "row",
                input {
                    placeholder: "Category",
                    list: "forum-categories",
                    value: "{ctrl.draft.category}",
                    oninput: move |e| page.update(|p| p.draft.category = e.value()),
                }
                label {
                    class: "checkbox",
                    input {
                        r#type: "checkbox",
                        checked: ctrl.draft.is_question,
                        onchange: move |e| page.update(|p| p.draft.is_question = e.checked()),
                    }
                    "This is a question"
                }
                button { r#type: "submit", class: "btn btn-primary", "Post" }
            }
            datalist {
                id: "forum-categories",
                for name in ctrl.categories.iter() {
                    option { key: "{name}", value: "{name}" }
                }
            }
        }

        div {
            class: "row filters",
            select {
                value: "{category}",
                onchange: move |e| {
                    let category = e.value();
                    page.run(move |mut p| async move {
                        let is_question = p.filter.is_question;
                        p.apply_filter(Some(category), is_question).await;
                        p
                    });
                },
                option { value: "", "All categories" }
                for name in ctrl.categories.iter() {
                    option { key: "{name}", value: "{name}", "{name}" }
                }
            }
            label {
                class: "checkbox",
                input {
                    r#type: "checkbox",
                    checked: questions_only,
                    onchange: move |e| {
                        let is_question = e.checked().then_some(true);
                        page.run(move |mut p| async move {
                            let category = p.filter.category.clone();
                            p.apply_filter(category, is_question).await;
                            p
                        });
                    },
                }
                "Questions only"
            }
        }

        if ctrl.state.is_loading() {
            Loader {}
        } else if ctrl.posts.is_empty() {
            p { class: "empty", "No posts yet. Start the conversation!" }
        }

        for post in ctrl.posts.iter() {
            {
                let id = post.id;
                let own = ctrl.is_own(post);
                let replies = ctrl.replies.get(&id);
                let reply_draft = ctrl.reply_drafts.get(&id).cloned().unwrap_or_default();
                rsx! {
                    article {
                        key: "{id}",
                        class: "panel post",
                        div {
                            class: "post-header",
                            if let Some(title) = &post.title {
                                h3 { "{title}" }
                            }
                            if post.is_question {
                                span { class: "badge", "Question" }
                            }
                            if let Some(category) = &post.category {
                                span { class: "badge", "{category}" }
                            }
                            if own {
                                button {
                                    class: "btn btn-icon",
                                    title: "Delete post",
                                    onclick: move |_| page.run(move |mut p| async move {
                                        p.delete_post(id).await;
                                        p
                                    }),
                                    Icon { icon: FaTrash, width: 12, height: 12 }
                                }
                            }
                        }
                        p { "{post.content}" }

                        if let Some(replies) = replies {
                            ul {
                                class: "replies",
                                for reply in replies.iter() {
                                    li { key: "{reply.id}", "{reply.content}" }
                                }
                            }
                            div {
                                class: "row",
                                input {
                                    placeholder: "Write a reply",
                                    value: "{reply_draft}",
                                    oninput: move |e| page.update(|p| {
                                        p.reply_drafts.insert(id, e.value());
                                    }),
                                }
                                button {
                                    class: "btn btn-secondary",
                                    onclick: move |_| page.run(move |mut p| async move {
                                        p.reply(id).await;
                                        p
                                    }),
                                    "Reply"
                                }
                            }
                        } else {
                            button {
                                class: "btn btn-link",
                                onclick: move |_| page.run(move |mut p| async move {
                                    p.load_replies(id).await;
                                    p
                                }),
                                "Show replies"
                            }
                        }
                    }
                }
            }
        }
    }
}
