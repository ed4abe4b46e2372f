use dioxus::prelude::*;

/// Hover tooltip. Pure CSS — the content shows while the trigger is
/// hovered or focused, no positioning script involved.
#[component]
pub fn Tooltip(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span { class: "tooltip", {children} }
    }
}

#[component]
pub fn TooltipTrigger(children: Element) -> Element {
    rsx! {
        span { class: "tooltip-trigger", tabindex: 0, {children} }
    }
}

#[component]
pub fn TooltipContent(children: Element) -> Element {
    rsx! {
        span { class: "tooltip-content", role: "tooltip", {children} }
    }
}
