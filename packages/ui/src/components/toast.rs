use dioxus::prelude::*;

use crate::icons::{FaCircleCheck, FaCircleExclamation, FaCircleInfo, FaXmark};
use crate::notify::{Level, Notice};
use crate::Icon;

/// The page's single notice, if any. Closing reports the notice id.
#[component]
pub fn Toast(notice: Option<Notice>, on_close: EventHandler<u64>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };
    let id = notice.id;

    let (class, icon) = match notice.level {
        Level::Success => ("toast toast--success", rsx! { Icon { icon: FaCircleCheck, width: 16, height: 16 } }),
        Level::Error => ("toast toast--error", rsx! { Icon { icon: FaCircleExclamation, width: 16, height: 16 } }),
        Level::Info => ("toast toast--info", rsx! { Icon { icon: FaCircleInfo, width: 16, height: 16 } }),
    };

    rsx! {
        div {
            class,
            role: "status",
            {icon}
            span { class: "toast-message", "{notice.message}" }
            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| on_close.call(id),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}
