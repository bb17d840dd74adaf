use dioxus::prelude::*;
use uuid::Uuid;

use crate::notifications::{Toast, ToastQueue};

/// Renders the shared toast queue in the top-right corner.
#[component]
pub fn ToastStack() -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();
    if queue.read().is_empty() {
        return rsx! {};
    }
    let toasts = queue.read().toasts().to_vec();

    rsx! {
        div {
            style: "
                position: fixed;
                top: 16px;
                right: 16px;
                display: flex;
                flex-direction: column;
                gap: 8px;
                z-index: 100;
                max-width: 360px;
            ",
            for toast in toasts {
                ToastView {
                    key: "{toast.id}",
                    toast: toast.clone(),
                    on_dismiss: move |id: Uuid| queue.write().dismiss(id),
                }
            }
        }
    }
}

#[component]
fn ToastView(toast: Toast, on_dismiss: EventHandler<Uuid>) -> Element {
    let id = toast.id;
    let duration = toast.notice.duration;

    // Auto-dismiss; the task dies with the toast if it is closed early
    use_hook(move || {
        spawn(async move {
            tokio::time::sleep(duration).await;
            on_dismiss.call(id);
        })
    });

    let (accent, background) = toast.notice.severity.colors();
    let title = toast.notice.title;
    let description = toast.notice.description.unwrap_or_default();

    rsx! {
        div {
            style: format!("
                display: flex;
                align-items: flex-start;
                gap: 12px;
                padding: 12px 16px;
                background: {};
                border: 1px solid {}30;
                border-left: 4px solid {};
                border-radius: 8px;
                box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
            ", background, accent, accent),

            div {
                style: "flex: 1;",
                div {
                    style: format!("font-weight: 600; font-size: 0.875rem; color: {};", accent),
                    "{title}"
                }
                if !description.is_empty() {
                    div {
                        style: "font-size: 0.8125rem; color: #374151; margin-top: 2px;",
                        "{description}"
                    }
                }
            }
            button {
                style: "background: none; border: none; color: #6B7280; cursor: pointer; font-size: 1rem;",
                onclick: move |_| on_dismiss.call(id),
                "×"
            }
        }
    }
}
