use dioxus::prelude::*;

/// Oldest toasts are dropped past this count.
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastItem {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for pushing notifications. Copy, so it can be captured freely
/// in event handlers.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastItem>>,
    next_id: Signal<u64>,
}

impl Toasts {
    fn push(&mut self, kind: ToastKind, message: impl Into<String>) {
        let id = {
            let mut next = self.next_id.write();
            *next += 1;
            *next
        };
        let mut items = self.items.write();
        items.push(ToastItem {
            id,
            kind,
            message: message.into(),
        });
        if items.len() > MAX_VISIBLE {
            let overflow = items.len() - MAX_VISIBLE;
            items.drain(..overflow);
        }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|t| t.id != id);
    }
}

/// Hook to access the toast handle. Panics outside a `ToastProvider`.
pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

/// Provides the toast context and renders the viewport after its children.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    use_context_provider(|| Toasts {
        items: Signal::new(Vec::new()),
        next_id: Signal::new(0),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        {children}
        ToastViewport {}
    }
}

/// Stacked toast list in the corner. Click dismisses.
#[component]
fn ToastViewport() -> Element {
    let mut toasts = use_toasts();
    let items = toasts.items.read().clone();

    rsx! {
        div { class: "toast-viewport",
            for item in items {
                div {
                    key: "{item.id}",
                    class: "toast",
                    "data-kind": item.kind.class(),
                    onclick: {
                        let id = item.id;
                        move |_| toasts.dismiss(id)
                    },
                    span { class: "toast-message", "{item.message}" }
                }
            }
        }
    }
}
