//! Card primitive and its slots

use leptos::*;

use super::cn;

#[component]
pub fn Card(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let class = cn(&[
        "flex flex-col gap-6 rounded-xl border bg-card py-6 text-card-foreground shadow-sm",
        class,
    ]);

    view! {
        <div data-slot="card" class=class>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let class = cn(&["grid auto-rows-min items-start gap-1.5 px-6", class]);

    view! {
        <div data-slot="card-header" class=class>
            {children()}
        </div>
    }
}

/// Card heading, one level below the section heading.
#[component]
pub fn CardTitle(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let class = cn(&["leading-none font-semibold", class]);

    view! {
        <h3 data-slot="card-title" class=class>
            {children()}
        </h3>
    }
}

#[component]
pub fn CardDescription(
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = cn(&["text-sm text-muted-foreground", class]);

    view! {
        <p data-slot="card-description" class=class>
            {children()}
        </p>
    }
}

#[component]
pub fn CardContent(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    let class = cn(&["px-6", class]);

    view! {
        <div data-slot="card-content" class=class>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_card_slots_nest_in_order() {
        let html = render(|| {
            view! {
                <Card class="overflow-hidden">
                    <CardHeader>
                        <CardTitle>"Title"</CardTitle>
                        <CardDescription>"Author"</CardDescription>
                    </CardHeader>
                    <CardContent>"Body"</CardContent>
                </Card>
            }
        });

        let slots = [
            r#"data-slot="card""#,
            r#"data-slot="card-header""#,
            r#"data-slot="card-title""#,
            r#"data-slot="card-description""#,
            r#"data-slot="card-content""#,
        ];
        let positions: Vec<usize> = slots
            .iter()
            .map(|slot| html.find(slot).unwrap_or_else(|| panic!("missing {slot}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(html.contains("<h3"));
        assert!(html.contains("overflow-hidden"));
    }
}
