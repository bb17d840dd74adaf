use dioxus::prelude::*;
use log::info;

use super::{AppointmentQueryDialog, ToastStack};
use crate::config::BookingConfig;
use crate::notifications::ToastQueue;

/// Booking page that hosts the query dialog: pick a slot, fill in the form.
pub fn App() -> Element {
    let config = use_context::<BookingConfig>();
    use_context_provider(|| Signal::new(ToastQueue::default()));

    let mut is_open = use_signal(|| false);
    let mut selected_slot = use_signal(|| None::<String>);
    // Bumped on every open so each opening mounts a fresh dialog
    let mut opening = use_signal(|| 0u64);

    let on_pick = move |slot_id: String| {
        info!("Slot {} selected", slot_id);
        selected_slot.set(Some(slot_id));
        *opening.write() += 1;
        is_open.set(true);
    };

    let on_close = move |_| {
        is_open.set(false);
    };

    rsx! {
        div {
            style: "
                font-family: system-ui, sans-serif;
                min-height: 100vh;
                background: #F9FAFB;
                margin: 0;
                padding: 32px 20px;
                box-sizing: border-box;
            ",

            div {
                style: "
                    max-width: 640px;
                    margin: 0 auto;
                    background: white;
                    border-radius: 12px;
                    padding: 32px;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                    border: 1px solid #E2E8F0;
                ",

                h2 {
                    style: "font-size: 1.5rem; font-weight: 500; color: #1E293B; margin: 0 0 8px 0;",
                    "Book a Consultation"
                }
                p {
                    style: "font-size: 0.875rem; color: #64748B; margin: 0 0 24px 0;",
                    "Pick a time slot and tell us what you are looking for."
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 12px;",
                    for slot_id in config.slots.iter().cloned() {
                        SlotRow {
                            key: "{slot_id}",
                            selected: selected_slot.read().as_deref() == Some(slot_id.as_str()),
                            slot_id: slot_id.clone(),
                            on_pick: on_pick,
                        }
                    }
                }
            }

            for opening_id in std::iter::once(*opening.read()) {
                AppointmentQueryDialog {
                    key: "{opening_id}",
                    is_open: *is_open.read(),
                    on_close: on_close,
                    selected_slot_id: selected_slot.read().clone(),
                }
            }

            ToastStack {}
        }
    }
}

#[component]
fn SlotRow(slot_id: String, selected: bool, on_pick: EventHandler<String>) -> Element {
    rsx! {
        div {
            style: format!("
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 12px 16px;
                border: 1px solid {};
                border-radius: 8px;
            ", if selected { "#D69E2E" } else { "#E2E8F0" }),
            span {
                style: "font-size: 0.875rem; color: #374151;",
                "{slot_id}"
            }
            button {
                style: "
                    padding: 8px 16px;
                    background: #1E293B;
                    color: white;
                    border: none;
                    border-radius: 6px;
                    font-size: 0.875rem;
                    cursor: pointer;
                ",
                onclick: move |_| on_pick.call(slot_id.clone()),
                "Book"
            }
        }
    }
}
