//! Input primitive

use leptos::*;

use super::cn;

/// Plain text field. No handlers are attached; focus styling comes from CSS.
#[component]
pub fn Input(
    /// HTML input type, `text` when omitted
    #[prop(optional)]
    input_type: Option<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    /// Accessible name, for fields without a visible label
    #[prop(optional)]
    aria_label: Option<&'static str>,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let class = cn(&[
        "flex h-9 w-full min-w-0 rounded-md border border-input bg-transparent px-3 py-1 \
         text-base shadow-xs outline-none transition-[color,box-shadow] \
         placeholder:text-muted-foreground focus-visible:border-ring \
         focus-visible:ring-[3px] focus-visible:ring-ring/50 md:text-sm",
        class,
    ]);
    let input_type = input_type.unwrap_or("text");

    view! {
        <input
            type=input_type
            data-slot="input"
            placeholder=placeholder
            aria-label=aria_label
            class=class
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_input_attributes() {
        let html = render(|| {
            view! { <Input input_type="search" placeholder="Find..." aria_label="Find"/> }
        });

        assert!(html.contains(r#"type="search""#));
        assert!(html.contains(r#"placeholder="Find...""#));
        assert!(html.contains(r#"aria-label="Find""#));
        assert!(html.contains(r#"data-slot="input""#));
    }

    #[test]
    fn test_input_defaults_to_text() {
        let html = render(|| view! { <Input/> });

        assert!(html.contains(r#"type="text""#));
        assert!(!html.contains("aria-label"));
    }
}
