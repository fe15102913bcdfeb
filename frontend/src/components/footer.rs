//! Footer component

use leptos::*;

use crate::COPYRIGHT_NOTICE;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t py-12">
            <div class="container mx-auto px-4 text-center text-sm text-muted-foreground">
                <p>{COPYRIGHT_NOTICE}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_footer_copyright() {
        let html = render(|| view! { <Footer/> });

        assert!(html.contains("<footer"));
        assert!(html.contains("© 2026 AudioBook Project."));
        assert!(html.contains("Tailwind CSS 4."));
    }
}
