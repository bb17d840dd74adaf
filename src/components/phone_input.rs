use dioxus::prelude::*;

use crate::phone::{country_or_default, normalize, COUNTRIES};

/// Country-aware phone field. Reports `+<dial code><digits>` on every change,
/// or an empty string while no digits are entered.
#[component]
pub fn PhoneInput(default_country: String, on_change: EventHandler<String>) -> Element {
    let mut country = use_signal(|| country_or_default(&default_country));
    let mut local = use_signal(String::new);

    rsx! {
        div {
            style: "display: flex; gap: 6px;",
            select {
                style: "
                    padding: 10px 8px;
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    font-size: 0.875rem;
                    background: white;
                    color: #374151;
                    cursor: pointer;
                ",
                value: country.read().iso,
                onchange: move |evt| {
                    let selected = country_or_default(&evt.value());
                    country.set(selected);
                    on_change.call(normalize(&selected, &local.read()));
                },
                for c in COUNTRIES.iter().copied() {
                    option {
                        key: "{c.iso}",
                        value: c.iso,
                        selected: country.read().iso == c.iso,
                        title: c.name,
                        "+{c.dial_code}"
                    }
                }
            }
            input {
                style: "
                    flex: 1;
                    min-width: 0;
                    padding: 10px 14px;
                    border: 1px solid #D1D5DB;
                    border-radius: 6px;
                    font-size: 0.875rem;
                    background: white;
                    color: #374151;
                    box-sizing: border-box;
                ",
                r#type: "tel",
                placeholder: "98765 43210",
                value: "{local}",
                oninput: move |evt| {
                    let value = evt.value();
                    on_change.call(normalize(&country.read(), &value));
                    local.set(value);
                },
            }
        }
    }
}
