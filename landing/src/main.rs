// MettaMate Landing Page - Leptos 0.8 Edition
// Developed with care by The MettaMate Team (c)2025

mod dom;
mod icons;
mod logging;
mod sections;

use leptos::prelude::*;
use mettamate_site::SiteConfig;
use mettamate_site::styles::SITE_CSS;
use sections::*;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const SITE_TOML: &str = include_str!("../site.toml");

const ROOT_ID: &str = "root";

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match SiteConfig::from_toml_str(SITE_TOML) {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };
    logging::init(config.log_filter().unwrap_or(LevelFilter::INFO));
    if let Some(err) = config_error {
        warn!(%err, "invalid site.toml, using defaults");
    }

    let Some(root) = page_root() else {
        warn!(id = ROOT_ID, "mount point missing, nothing rendered");
        return;
    };

    info!("mounting landing page");
    leptos::mount::mount_to(root, move || view! { <App config=config /> }).forget();
}

fn page_root() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(ROOT_ID)?
        .dyn_into::<HtmlElement>()
        .ok()
}

#[component]
fn App(config: SiteConfig) -> impl IntoView {
    dom::use_scroll_reveal(config.reveal.clone());
    provide_context(config);

    view! {
        <style>{SITE_CSS}</style>
        <Navigation />
        <main>
            <Hero />
            <ShowingUp />
            <Events />
            <Manifesto />
            <Bridge />
            <Grow />
            <Voices />
            <Impact />
            <GlobalGathering />
            <Support />
            <Safety />
            <Faq />
            <Footer />
        </main>
    }
}
