// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
pub mod compat;
mod components;
pub mod conversion_form;
pub mod hooks;
mod screens;

use api::config::ApiConfig;
use app_state::AppState;
use components::pico::Container;
use screens::converter::ConverterScreen;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let css = r#"
    .container { max-width: 40rem; }
    #app footer { text-align: center; }
    #app strong { font-size: 1.5rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Title { "Eurodol" }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // this will be processed on server before initial page is delivered.
    let config_future = use_server_future(move || async move { api::api_config().await })?;

    let body = match &*config_future.read() {
        Some(Ok(config)) => rsx! {
            LoadedApp {
                config: config.clone(),
            }
        },
        Some(Err(e)) => {
            dioxus_logger::tracing::error!("failed to load api config: {}", e);
            rsx! {
                Container {
                    p {
                        "An error occurred: {e}"
                    }
                }
            }
        }
        None => rsx! {
            Container {
                p {
                    "Loading..."
                }
            }
        },
    };
    body
}

/// Builds the shared state once the configuration is known.
#[component]
fn LoadedApp(config: ApiConfig) -> Element {
    use_context_provider(|| AppState::new(config.clone()));

    rsx! {
        Container {
            ConverterScreen {}
        }
    }
}
