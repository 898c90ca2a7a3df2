use dioxus::prelude::*;

/// Numeric input for the source amount.
///
/// The raw text is forwarded on every keystroke; no validation beyond
/// what the browser applies to `type="number"`.
#[component]
pub fn AmountInput(value: String, on_input: EventHandler<String>) -> Element {
    rsx! {
        label {
            "Amount"
            input {
                r#type: "number",
                name: "amount",
                min: "0",
                step: "any",
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
        }
    }
}
