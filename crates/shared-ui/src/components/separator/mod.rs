use crate::attrs::merge_attributes;
use dioxus::prelude::*;

/// Thin divider line.
#[component]
pub fn Separator(
    #[props(default = true)] horizontal: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let orientation = if horizontal { "horizontal" } else { "vertical" };
    let base = vec![
        Attribute::new("class", "separator", None, false),
        Attribute::new("data-orientation", orientation, None, false),
    ];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: "separator",
            ..merged,
        }
    }
}
