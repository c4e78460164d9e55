//! Trial and publication card.

use dioxus::prelude::*;

use crate::catalog::{PublicationCard, TrialCard};
use crate::icons::{FaArrowUpRightFromSquare, FaHeart, FaWandMagicSparkles};
use crate::Icon;

/// What a card shows, whichever catalog entry it came from.
#[derive(Clone, Debug, PartialEq)]
pub struct CardContent {
    pub id: String,
    pub title: String,
    /// Short tags under the title: phase, location, condition, journal.
    pub badges: Vec<String>,
    pub body: String,
    pub url: Option<String>,
    pub external: bool,
}

impl From<&TrialCard> for CardContent {
    fn from(card: &TrialCard) -> Self {
        let badges = [&card.phase, &card.location, &card.condition]
            .into_iter()
            .flatten()
            .filter(|b| !b.trim().is_empty())
            .cloned()
            .collect();
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            badges,
            body: card.description.clone().unwrap_or_default(),
            url: card.url.clone(),
            external: card.is_external(),
        }
    }
}

impl From<&PublicationCard> for CardContent {
    fn from(card: &PublicationCard) -> Self {
        let badges = [&card.journal, &card.authors]
            .into_iter()
            .flatten()
            .filter(|b| !b.trim().is_empty())
            .cloned()
            .collect();
        Self {
            id: card.id.clone(),
            title: card.title.clone(),
            badges,
            body: card.summary.clone(),
            url: card.url.clone(),
            external: card.is_external(),
        }
    }
}

#[component]
pub fn Card(
    content: CardContent,
    /// AI summary, or the failure line, once requested.
    summary: Option<String>,
    #[props(default)] summarizing: bool,
    on_summarize: EventHandler<String>,
    on_save: EventHandler<String>,
) -> Element {
    let summarize_id = content.id.clone();
    let save_id = content.id.clone();

    rsx! {
        div {
            class: "card",
            div {
                class: "card-header",
                h3 { class: "card-title", "{content.title}" }
                if content.external {
                    span { class: "card-source", "External" }
                }
            }
            if !content.badges.is_empty() {
                div {
                    class: "card-badges",
                    for badge in content.badges.iter() {
                        span { class: "badge", "{badge}" }
                    }
                }
            }
            p { class: "card-body", "{content.body}" }
            div {
                class: "card-actions",
                button {
                    class: "btn btn-ai",
                    disabled: summarizing,
                    onclick: move |_| on_summarize.call(summarize_id.clone()),
                    Icon { icon: FaWandMagicSparkles, width: 14, height: 14 }
                    if summarizing { " Summarizing..." } else { " Summarize" }
                }
                button {
                    class: "btn btn-save",
                    onclick: move |_| on_save.call(save_id.clone()),
                    Icon { icon: FaHeart, width: 14, height: 14 }
                    " Save"
                }
                if let Some(url) = content.url.clone() {
                    a {
                        class: "btn btn-link",
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                        " View"
                    }
                }
            }
            if let Some(summary) = summary {
                div {
                    class: "card-summary",
                    strong { "AI Summary: " }
                    "{summary}"
                }
            }
        }
    }
}
