//=============================================================================
// File: src/screens/converter.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::amount_input::AmountInput;
use crate::components::conversion_result::ConversionErrorPanel;
use crate::components::conversion_result::ConversionResult;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::symbol_select::SymbolSelect;
use crate::hooks::use_converter::use_converter;

/// The currency converter widget.
///
/// Renders hidden until mounted so the unbound form never flashes.
#[component]
pub fn ConverterScreen() -> Element {
    let converter = use_converter();
    let form = converter.state().read().clone();

    let on_mount = converter.clone();
    let on_amount = converter.clone();
    let on_symbol = converter.clone();
    let on_convert = converter.clone();
    let on_source = converter.clone();

    rsx! {
        div {
            id: "app",
            style: if form.ready { "display: block;" } else { "display: none;" },
            onmounted: move |_| on_mount.on_mount(),

            Card {
                h2 { "Eurodol" }
                p { "Convert between euros and US dollars." }
                div {
                    class: "grid",
                    AmountInput {
                        value: form.amount.clone(),
                        on_input: move |amount: String| on_amount.on_amount_input(amount),
                    }
                    SymbolSelect {
                        selected: form.symbol.clone(),
                        symbols: form.symbols.clone(),
                        on_change: move |symbol: String| on_symbol.on_symbol_change(symbol),
                    }
                }
                Button {
                    busy: form.phase().is_pending(),
                    on_click: move |_| on_convert.on_convert(),
                    "Convert"
                }
            }

            if form.show_results {
                ConversionResult {
                    amount: form.amount_result.clone(),
                    symbol: form.symbol_result.clone(),
                }
            }
            if form.show_error {
                ConversionErrorPanel {}
            }

            footer {
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| on_source.on_get_source_code(),
                    "Get the source code"
                }
            }
        }
    }
}
