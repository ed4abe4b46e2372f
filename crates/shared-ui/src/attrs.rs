use dioxus::dioxus_core::AttributeValue;
use dioxus::prelude::*;

/// Merge attribute groups into one list for spreading onto an element.
///
/// Duplicate `class` attributes are joined with a space so a component's
/// base class survives caller overrides; for any other duplicated name the
/// later group wins.
pub fn merge_attributes(groups: Vec<Vec<Attribute>>) -> Vec<Attribute> {
    let mut merged: Vec<Attribute> = Vec::new();
    for attr in groups.into_iter().flatten() {
        match merged.iter_mut().find(|a| a.name == attr.name) {
            Some(existing) if attr.name == "class" => {
                let joined = format!("{} {}", text_of(&existing.value), text_of(&attr.value));
                existing.value = AttributeValue::Text(joined);
            }
            Some(existing) => {
                existing.value = attr.value;
            }
            None => merged.push(attr),
        }
    }
    merged
}

fn text_of(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Text(s) => s.clone(),
        AttributeValue::Int(i) => i.to_string(),
        AttributeValue::Float(f) => f.to_string(),
        AttributeValue::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn class_attr(value: &str) -> Attribute {
        Attribute::new("class", value.to_string(), None, false)
    }

    #[test]
    fn classes_are_joined() {
        let merged = merge_attributes(vec![vec![class_attr("card")], vec![class_attr("wide")]]);
        assert_eq!(merged.len(), 1);
        assert_eq!(text_of(&merged[0].value), "card wide");
    }

    #[test]
    fn later_group_wins_for_non_class() {
        let a = Attribute::new("id", "one".to_string(), None, false);
        let b = Attribute::new("id", "two".to_string(), None, false);
        let merged = merge_attributes(vec![vec![a], vec![b]]);
        assert_eq!(merged.len(), 1);
        assert_eq!(text_of(&merged[0].value), "two");
    }

    #[test]
    fn distinct_names_are_kept() {
        let merged = merge_attributes(vec![
            vec![class_attr("badge")],
            vec![Attribute::new("id", "x".to_string(), None, false)],
        ]);
        assert_eq!(merged.len(), 2);
    }
}
