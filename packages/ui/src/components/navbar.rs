use dioxus::prelude::*;
use store::{Role, User};

use crate::icons::{FaRightFromBracket, FaStethoscope};
use crate::pages::{dashboard_route, routes};
use crate::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub to: &'static str,
}

/// Links offered to `user`: role-specific pages first, then the shared ones.
/// Visitors without a session only get the entry page.
pub fn nav_links(user: Option<&User>) -> Vec<NavLink> {
    let Some(user) = user else {
        return vec![NavLink {
            label: "Get Started",
            to: routes::LANDING,
        }];
    };

    let role_page = match user.role() {
        Role::Patient => NavLink {
            label: "Health Experts",
            to: routes::HEALTH_EXPERTS,
        },
        Role::Researcher => NavLink {
            label: "Collaborators",
            to: routes::COLLABORATORS,
        },
    };
    vec![
        NavLink {
            label: "Dashboard",
            to: dashboard_route(user.role()),
        },
        role_page,
        NavLink {
            label: "Forum",
            to: routes::FORUM,
        },
        NavLink {
            label: "Favorites",
            to: routes::FAVORITES,
        },
    ]
}

#[component]
pub fn Navbar(user: Option<User>, on_logout: EventHandler) -> Element {
    let links = nav_links(user.as_ref());

    rsx! {
        nav {
            class: "navbar",
            Link {
                class: "navbar-brand",
                to: routes::LANDING,
                Icon { icon: FaStethoscope, width: 20, height: 20 }
                span { "CuraLink" }
            }
            div {
                class: "navbar-links",
                for link in links {
                    Link { class: "navbar-link", to: link.to, "{link.label}" }
                }
                if let Some(user) = user.as_ref() {
                    span { class: "navbar-user", "{user.name}" }
                    button {
                        class: "btn btn-logout",
                        onclick: move |_| on_logout.call(()),
                        Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                        " Logout"
                    }
                }
            }
        }
    }
}
