use dioxus::prelude::*;

use ui::i18n::use_localization_provider;
use ui::views::Home;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Locale state for the whole page; sections read it through `use_i18n`.
    use_localization_provider();

    #[cfg(debug_assertions)]
    {
        tracing::debug!("[i18n] App render lang={}", ui::i18n::use_i18n().locale());
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "preconnect", href: "https://www.google.com" }

        Home {}
    }
}
