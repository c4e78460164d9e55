use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoaderSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl LoaderSize {
    fn class(&self) -> &'static str {
        match self {
            LoaderSize::Sm => "loader-spinner loader-spinner--sm",
            LoaderSize::Md => "loader-spinner loader-spinner--md",
            LoaderSize::Lg => "loader-spinner loader-spinner--lg",
        }
    }
}

#[component]
pub fn Loader(
    #[props(default = "Loading...".to_string())] text: String,
    #[props(default)] size: LoaderSize,
) -> Element {
    rsx! {
        div {
            class: "loader",
            div { class: size.class() }
            if !text.is_empty() {
                p { class: "loader-text", "{text}" }
            }
        }
    }
}
