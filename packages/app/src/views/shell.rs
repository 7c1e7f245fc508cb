use dioxus::prelude::*;
use ui::use_session;

use crate::Route;

/// App chrome shared by every view: the title bar with the logged-in
/// user's chip, and the routed content below it.
#[component]
pub fn Shell() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "app",

            header {
                class: "app-header",
                div { class: "app-header-side" }
                h1 { class: "app-title", "LIFTPLAN" }
                div {
                    class: "app-header-side app-header-user",
                    if let Some(username) = session().username {
                        span { class: "user-chip", "{username}" }
                    }
                }
            }

            main {
                class: "app-main",
                Outlet::<Route> {}
            }
        }
    }
}
