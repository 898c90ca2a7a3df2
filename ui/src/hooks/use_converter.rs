use api::conversion::ConversionClient;
use dioxus::prelude::*;

use crate::app_state::AppState;
use crate::compat;
use crate::conversion_form::ConversionFormState;

pub const SOURCE_CODE_URL: &str = "https://github.com/alexandreroman/eurodol";

/// Controller for the converter widget.
///
/// Owns the reactive form state and runs conversions with the shared client.
#[derive(Clone)]
pub struct Converter {
    state: Signal<ConversionFormState>,
    app_state: AppState,
}

impl Converter {
    /// The reactive form state. Read it in a component to subscribe.
    pub fn state(&self) -> Signal<ConversionFormState> {
        self.state
    }

    pub fn on_mount(&self) {
        let mut state = self.state;
        state.write().mount();
    }

    /// Issues a conversion for the current inputs without blocking.
    ///
    /// Rapid repeated calls are all sent; only the newest response is shown.
    pub fn on_convert(&self) {
        let mut state = self.state;
        let app_state = self.app_state.clone();
        let (ticket, request) = state.write().begin_convert();

        spawn(async move {
            let result = app_state.client.convert(&request).await;
            let applied = state.write().complete(ticket, result, &app_state.locale);
            if applied {
                dioxus_logger::tracing::info!(
                    "conversion of {} {} finished",
                    request.amount,
                    request.symbol
                );
            }
        });
    }

    pub fn on_input_updated(&self) {
        let mut state = self.state;
        state.write().input_updated();
    }

    pub fn on_amount_input(&self, amount: String) {
        let mut state = self.state;
        state.write().amount = amount;
        self.on_input_updated();
    }

    pub fn on_symbol_change(&self, symbol: String) {
        let mut state = self.state;
        state.write().symbol = symbol;
        self.on_input_updated();
    }

    pub fn on_get_source_code(&self) {
        spawn(async move {
            if !compat::navigate_to(SOURCE_CODE_URL).await {
                dioxus_logger::tracing::warn!("could not navigate to {}", SOURCE_CODE_URL);
            }
        });
    }
}

pub fn use_converter() -> Converter {
    let app_state = use_context::<AppState>();
    let state = use_signal(ConversionFormState::default);
    Converter { state, app_state }
}
