use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod controller;
mod error;
mod logging;

use components::RecommenderShell;
use config::ClientConfig;

const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    let loaded = ClientConfig::load();
    let level = loaded
        .as_ref()
        .map(|config| config.log_level)
        .unwrap_or(tracing::Level::INFO);
    if let Err(e) = logging::init_logging(level) {
        eprintln!("{e}");
    }

    let config = loaded.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Falling back to default configuration");
        ClientConfig::new(String::new())
    });
    tracing::info!(endpoint = %config.endpoint_url(), "Starting song recommender");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Song Recommender" }
        document::Meta { name: "theme-color", content: "#1db954" }
        document::Stylesheet { href: APP_CSS }

        RecommenderShell {}
    }
}
