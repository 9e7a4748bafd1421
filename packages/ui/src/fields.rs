//! Labelled form inputs. Every field reports the raw input string; parsing
//! into draft types happens in the caller via `store::inputs`.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// `(value, label)` pairs for a select built from an enum's wire names.
pub fn enum_options<T: Serialize>(
    values: &[T],
    label: impl Fn(&T) -> &'static str,
) -> Vec<(String, String)> {
    values
        .iter()
        .filter_map(|v| api::query::wire_name(v).map(|w| (w, label(v).to_string())))
        .collect()
}

/// Inverse of [`enum_options`]. Blank selects "none".
pub fn parse_wire<T: DeserializeOwned>(value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    serde_json::from_value(serde_json::Value::String(value.to_string())).ok()
}

/// Current wire name of an optional enum, blank when unset.
pub fn wire_value<T: Serialize>(value: Option<&T>) -> String {
    value.and_then(|v| api::query::wire_name(v)).unwrap_or_default()
}

#[component]
pub fn TextField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] placeholder: String,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            input {
                class: "field-input",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                required: required,
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn TextAreaField(
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = 4)] rows: u32,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            textarea {
                class: "field-input",
                rows: "{rows}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

#[component]
pub fn SelectField(
    label: String,
    value: String,
    options: Vec<(String, String)>,
    onchange: EventHandler<String>,
    /// Label of a leading blank option; omitted when `None`.
    #[props(default)]
    blank: Option<String>,
) -> Element {
    rsx! {
        label {
            class: "field",
            span { class: "field-label", "{label}" }
            select {
                class: "field-input",
                value: "{value}",
                onchange: move |evt: FormEvent| onchange.call(evt.value()),
                if let Some(blank) = blank {
                    option { value: "", "{blank}" }
                }
                for (key, text) in options {
                    option {
                        key: "{key}",
                        value: "{key}",
                        selected: key == value,
                        "{text}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn CheckboxField(label: String, checked: bool, onchange: EventHandler<bool>) -> Element {
    rsx! {
        label {
            class: "field field--inline",
            input {
                r#type: "checkbox",
                checked: checked,
                onchange: move |evt: FormEvent| onchange.call(evt.checked()),
            }
            span { class: "field-label", "{label}" }
        }
    }
}

/// Free-text search box. Each keystroke is reported; debouncing is the
/// caller's job.
#[component]
pub fn SearchBox(
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "Search...".to_string())] placeholder: String,
) -> Element {
    rsx! {
        input {
            class: "field-input search-box",
            r#type: "search",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt: FormEvent| oninput.call(evt.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Role;

    #[test]
    fn enum_options_use_wire_names_and_labels() {
        let options = enum_options(&Role::ALL, |r| r.label());
        assert_eq!(options.len(), 3);
        assert_eq!(options[1].0, "teamlead");
        assert_eq!(options[1].1, Role::TeamLead.label());
    }

    #[test]
    fn parse_wire_accepts_aliases_and_blank() {
        assert_eq!(parse_wire::<Role>("team-lead"), Some(Role::TeamLead));
        assert_eq!(parse_wire::<Role>(""), None);
        assert_eq!(parse_wire::<Role>("owner"), None);
    }

    #[test]
    fn wire_value_is_blank_when_unset() {
        assert_eq!(wire_value(Some(&Role::Admin)), "admin");
        assert_eq!(wire_value::<Role>(None), "");
    }
}
