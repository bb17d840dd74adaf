use dioxus::prelude::*;
use futures_util::stream::FuturesUnordered;
use futures_util::StreamExt;
use lucide_dioxus::ArrowRight;
use std::sync::Arc;

use super::PhoneInput;
use crate::booking::{DraftEdit, Location, ServiceType};
use crate::booking_client::{run_booking, BookingBackend};
use crate::commands::BookingCommand;
use crate::config::BookingConfig;
use crate::dialog_state::{
    finish_submission, start_submission, DialogController, Submission,
};
use crate::notifications::ToastQueue;

const LABEL_STYLE: &str = "
    display: block;
    font-size: 0.875rem;
    font-weight: 600;
    color: #374151;
    margin-bottom: 6px;
";

const INPUT_STYLE: &str = "
    width: 100%;
    padding: 10px 14px;
    border: 1px solid #D1D5DB;
    border-radius: 6px;
    font-size: 0.875rem;
    background: white;
    color: #374151;
    box-sizing: border-box;
";

#[component]
pub fn AppointmentQueryDialog(
    is_open: bool,
    on_close: EventHandler<()>,
    selected_slot_id: Option<String>,
) -> Element {
    let backend = use_context::<Arc<dyn BookingBackend>>();
    let config = use_context::<BookingConfig>();
    let mut toasts = use_context::<Signal<ToastQueue>>();
    let mut controller = use_signal(|| DialogController::new(is_open));

    use_effect(use_reactive((&is_open,), move |(is_open,)| {
        controller.write().sync_visibility(is_open);
    }));

    // Each request runs in its own task; unmounting the dialog drops only
    // the wait, not the request.
    let submissions = use_coroutine(move |mut rx: UnboundedReceiver<BookingCommand>| {
        let backend = backend.clone();
        let mut controller = controller;
        let mut toasts = toasts;
        async move {
            let mut in_flight = FuturesUnordered::new();
            loop {
                tokio::select! {
                    Some(command) = rx.next() => {
                        match command {
                            BookingCommand::Submit { submission } => {
                                let Submission { attempt, request } = submission;
                                let backend = backend.clone();
                                in_flight.push(async move {
                                    (attempt, run_booking(backend, request).await)
                                });
                            }
                        }
                    }
                    Some((attempt, result)) = in_flight.next(), if !in_flight.is_empty() => {
                        let close = finish_submission(
                            &mut controller.write(),
                            &mut toasts.write(),
                            attempt,
                            result,
                        );
                        if close {
                            on_close.call(());
                        }
                    }
                    else => break,
                }
            }
        }
    });

    if !is_open {
        return rsx! {};
    }

    // Until the open is synced, a reopened dialog must not show the old draft
    let view = controller.read().as_shown();
    let draft = view.draft().clone();
    let button = view.confirm_button(selected_slot_id.as_deref());
    let slot_id = selected_slot_id.clone();

    let on_confirm = move |_: MouseEvent| {
        let submission = start_submission(
            &mut controller.write(),
            &mut toasts.write(),
            slot_id.as_deref(),
        );
        if let Some(submission) = submission {
            submissions.send(BookingCommand::Submit { submission });
        }
    };

    rsx! {
        // Overlay
        div {
            style: "
                position: fixed;
                inset: 0;
                background: rgba(0, 0, 0, 0.5);
                display: flex;
                align-items: center;
                justify-content: center;
                z-index: 50;
            ",
            tabindex: "0",
            onclick: move |_| on_close.call(()),
            onkeydown: move |evt| {
                if evt.key() == dioxus::events::Key::Escape {
                    on_close.call(());
                }
            },

            // Dialog
            div {
                style: "
                    background: white;
                    border-radius: 12px;
                    padding: 24px;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    width: 100%;
                    max-width: 600px;
                    margin: 0 16px;
                    max-height: 95vh;
                    overflow-y: auto;
                    box-sizing: border-box;
                ",
                onclick: move |e| e.stop_propagation(),

                // Header
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                    h2 {
                        style: "font-size: 1.25rem; font-weight: 700; color: #1E293B; margin: 0;",
                        "Let us know your query?"
                    }
                    button {
                        style: "background: none; border: none; font-size: 1.25rem; color: #4B5563; cursor: pointer;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                // Service type
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 16px;",
                    for (service, value, caption) in ServiceType::ALL.map(|s| (s, s.as_str(), s.label())) {
                        label {
                            key: "{value}",
                            style: "display: inline-flex; align-items: center; gap: 6px; font-size: 0.875rem; color: #374151; cursor: pointer;",
                            input {
                                r#type: "radio",
                                name: "service_type",
                                value: value,
                                checked: draft.service_type == Some(service),
                                onchange: move |_| controller.write().update(DraftEdit::ServiceType(service)),
                            }
                            "{caption}"
                        }
                    }
                }

                // Name and phone
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px; margin-bottom: 12px;",
                    div {
                        style: "flex: 1; min-width: 220px;",
                        label { style: LABEL_STYLE, "Your Name*" }
                        input {
                            style: INPUT_STYLE,
                            r#type: "text",
                            placeholder: "Write your name",
                            value: "{draft.name}",
                            oninput: move |evt| controller.write().update(DraftEdit::Name(evt.value())),
                        }
                    }
                    div {
                        style: "flex: 1; min-width: 220px;",
                        label { style: LABEL_STYLE, "Your WhatsApp No.*" }
                        PhoneInput {
                            default_country: config.phone_country.clone(),
                            on_change: move |phone: String| controller.write().update(DraftEdit::Phone(phone)),
                        }
                    }
                }

                // Email
                div {
                    style: "margin-bottom: 12px;",
                    label { style: LABEL_STYLE, "Your Email*" }
                    input {
                        style: INPUT_STYLE,
                        r#type: "text",
                        placeholder: "Enter your email",
                        value: "{draft.email}",
                        oninput: move |evt| controller.write().update(DraftEdit::Email(evt.value())),
                    }
                }

                // Location
                div {
                    style: "margin-bottom: 12px;",
                    label { style: LABEL_STYLE, "Location*" }
                    select {
                        style: "{INPUT_STYLE} cursor: pointer;",
                        value: draft.location.value(),
                        onchange: move |evt| {
                            if let Some(location) = Location::from_value(&evt.value()) {
                                controller.write().update(DraftEdit::Location(location));
                            }
                        },
                        for (value, caption) in Location::ALL.map(|l| (l.value(), l.label())) {
                            option {
                                key: "{value}",
                                value: value,
                                selected: draft.location.value() == value,
                                "{caption}"
                            }
                        }
                    }
                }

                if draft.location == Location::Other {
                    div {
                        style: "margin-bottom: 12px;",
                        label { style: LABEL_STYLE, "Enter Location*" }
                        input {
                            style: INPUT_STYLE,
                            r#type: "text",
                            placeholder: "Type your location",
                            value: "{draft.custom_location}",
                            oninput: move |evt| controller.write().update(DraftEdit::CustomLocation(evt.value())),
                        }
                    }
                }

                // Query
                div {
                    style: "margin-bottom: 12px;",
                    label { style: LABEL_STYLE, "Tell us your query*" }
                    textarea {
                        style: "{INPUT_STYLE} min-height: 96px; resize: vertical;",
                        placeholder: "Write your query",
                        value: "{draft.query}",
                        oninput: move |evt| controller.write().update(DraftEdit::Query(evt.value())),
                    }
                }

                // Confirm
                div {
                    style: "display: flex; justify-content: center; margin-top: 16px;",
                    button {
                        style: format!("
                            display: inline-flex;
                            align-items: center;
                            gap: 8px;
                            padding: 12px 32px;
                            background: {};
                            color: white;
                            border: none;
                            border-radius: 6px;
                            font-size: 0.875rem;
                            font-weight: 600;
                            cursor: {};
                        ",
                            if button.enabled && !button.busy { "#D69E2E" } else { "#9CA3AF" },
                            if button.busy { "wait" } else if button.enabled { "pointer" } else { "not-allowed" }
                        ),
                        disabled: !button.enabled || button.busy,
                        onclick: on_confirm,
                        "{button.label}"
                        if !button.busy {
                            ArrowRight {
                                size: 18,
                                color: "currentColor",
                                stroke_width: 2
                            }
                        }
                    }
                }
            }
        }
    }
}
