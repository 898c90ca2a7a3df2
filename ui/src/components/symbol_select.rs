// ui/src/components/symbol_select.rs
#![allow(non_snake_case)]

use api::fiat_currency::FiatCurrency;
use dioxus::prelude::*;
use std::str::FromStr;

#[derive(Props, PartialEq, Clone)]
pub struct SymbolSelectProps {
    /// Code of the selected currency.
    pub selected: String,
    /// Codes to offer, in display order.
    pub symbols: Vec<String>,
    pub on_change: EventHandler<String>,
}

/// Long label for a code, e.g. "EUR - Euro". Unknown codes are shown bare.
fn label_for(code: &str) -> String {
    match FiatCurrency::from_str(code) {
        Ok(currency) => format!("{} - {} ({})", currency.code(), currency.name(), currency.symbol()),
        Err(_) => code.to_string(),
    }
}

/// Drop-down for the source currency.
pub fn SymbolSelect(props: SymbolSelectProps) -> Element {
    let on_change = props.on_change;
    rsx! {
        label {
            "Currency"
            select {
                name: "symbol",
                onchange: move |evt| on_change.call(evt.value()),
                for code in props.symbols.iter() {
                    option {
                        key: "{code}",
                        value: "{code}",
                        selected: *code == props.selected,
                        "{label_for(code)}"
                    }
                }
            }
        }
    }
}
