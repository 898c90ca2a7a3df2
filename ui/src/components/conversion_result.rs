//! Result and error panels of the converter.

use dioxus::prelude::*;

use crate::components::pico::Card;

/// Shows the converted amount, e.g. "108.50 USD".
#[component]
pub fn ConversionResult(amount: String, symbol: String) -> Element {
    rsx! {
        Card {
            p {
                "You get "
                strong { "{amount} {symbol}" }
            }
        }
    }
}

#[component]
pub fn ConversionErrorPanel() -> Element {
    rsx! {
        Card {
            p {
                role: "alert",
                "Unable to convert this amount right now. Please try again later."
            }
        }
    }
}
