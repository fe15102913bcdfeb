//! Button primitive

use leptos::*;

use super::cn;

const BASE_CLASS: &str = "inline-flex shrink-0 items-center justify-center gap-2 \
    whitespace-nowrap rounded-md text-sm font-medium transition-all outline-none \
    focus-visible:ring-[3px] focus-visible:ring-ring/50 disabled:pointer-events-none \
    disabled:opacity-50";

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled with the primary color
    #[default]
    Default,
    /// Transparent until hovered
    Ghost,
    /// Looks like a text link
    Link,
    /// Bordered, background on hover
    Outline,
}

impl ButtonVariant {
    /// Get CSS classes for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonVariant::Default => {
                "bg-primary text-primary-foreground shadow-xs hover:bg-primary/90"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
            ButtonVariant::Outline => {
                "border bg-background shadow-xs hover:bg-accent hover:text-accent-foreground"
            }
        }
    }
}

/// Height and padding of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
}

impl ButtonSize {
    /// Get CSS classes for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            ButtonSize::Default => "h-9 px-4 py-2",
            ButtonSize::Sm => "h-8 gap-1.5 rounded-md px-3",
            ButtonSize::Lg => "h-10 rounded-md px-6",
        }
    }
}

/// A `type="button"` control, so it never submits an enclosing form.
#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    /// Extra classes appended after the variant and size classes
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = cn(&[BASE_CLASS, variant.css_class(), size.css_class(), class]);

    view! {
        <button type="button" data-slot="button" class=class>
            {children()}
        </button>
    }
}
