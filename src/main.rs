use building_panel::{PanelConfig, PanelLayout};
use dioxus::prelude::*;
use tracing::{error, info, Level};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(|| match PanelConfig::bundled() {
        Ok(config) => {
            info!(sections = config.sections.len(), "loaded panel config");
            config
        }
        Err(err) => {
            error!(%err, "bundled panel config rejected, using defaults");
            PanelConfig::default()
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        PanelLayout { config }
    }
}
