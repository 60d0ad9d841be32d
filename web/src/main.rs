use dioxus::prelude::*;

use ui::components::NavBar;
use ui::core::platform::PageHandle;
use ui::views::Landing;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Browser-backed page host for every navbar link.
    use_context_provider(PageHandle::detected);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "landing page render");

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NavBar {}
        Landing {}
    }
}
