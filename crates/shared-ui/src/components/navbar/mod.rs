use crate::attrs::merge_attributes;
use dioxus::prelude::*;

/// Top navigation bar container.
#[component]
pub fn Navbar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "navbar", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header {
            ..merged,
            {children}
        }
    }
}

/// Brand/logo slot at the left edge of the navbar.
#[component]
pub fn NavbarBrand(children: Element) -> Element {
    rsx! {
        span { class: "navbar-brand", {children} }
    }
}

/// Flexible spacer pushing subsequent items to the right.
#[component]
pub fn NavbarSpacer() -> Element {
    rsx! {
        div { class: "navbar-spacer" }
    }
}
