use dioxus::prelude::*;

use ui::{use_app, AppProvider, Navbar};
use views::{
    Collaborators, Favorites, Forum, HealthExperts, Landing, PatientDashboard, PatientOnboard,
    ResearcherDashboard, ResearcherOnboard,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Landing {},
        #[route("/patient/onboard")]
        PatientOnboard {},
        #[route("/researcher/onboard")]
        ResearcherOnboard {},
        #[route("/patient/dashboard")]
        PatientDashboard {},
        #[route("/patient/experts")]
        HealthExperts {},
        #[route("/researcher/dashboard")]
        ResearcherDashboard {},
        #[route("/researcher/collaborators")]
        Collaborators {},
        #[route("/forum")]
        Forum {},
        #[route("/favorites")]
        Favorites {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            Router::<Route> {}
        }
    }
}

/// Navbar above every page. The session is re-read on each route change so
/// the links follow login and logout.
#[component]
fn Shell() -> Element {
    let app = use_app();
    let nav = use_navigator();
    // Subscribes to route changes.
    let _route = use_route::<Route>();
    let user = app.session().load();

    rsx! {
        Navbar {
            user,
            on_logout: move |_| {
                tracing::info!("signing out");
                app.session().clear();
                nav.replace(Route::Landing {});
            },
        }
        main {
            class: "page",
            Outlet::<Route> {}
        }
    }
}
