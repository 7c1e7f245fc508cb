use dioxus::prelude::*;

use store::MemoryStore;
use ui::SessionProvider;
use views::{Builder, Login, Shell, Templates};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/templates")]
        Templates {},
        #[route("/builder")]
        Builder {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // One saved-template collection for the whole process
    use_context_provider(MemoryStore::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            Router::<Route> {}
        }
    }
}

/// Redirect `/` based on session state.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if session().logged_in() {
        nav.replace(Route::Templates {});
    } else {
        nav.replace(Route::Login {});
    }

    rsx! {}
}
