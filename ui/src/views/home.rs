use dioxus::prelude::*;

use crate::components::Header;
use crate::sections::{
    About, Contact, Footer, ForWho, Hero, HowIWork, Location, Pricing, Services,
};

#[cfg(debug_assertions)]
fn log_home_render(lang: &str) {
    // Lightweight render trace for diagnosing i18n refresh issues.
    tracing::trace!("Home render (lang={lang})");
}

/// The whole site: header, every section in order, footer.
#[component]
pub fn Home() -> Element {
    #[cfg(debug_assertions)]
    {
        log_home_render(crate::i18n::use_i18n().locale().code());
    }

    rsx! {
        div { class: "page",
            Header {}
            main {
                Hero {}
                About {}
                Services {}
                ForWho {}
                HowIWork {}
                Pricing {}
                Location {}
                Contact {}
            }
            Footer {}
        }
    }
}
