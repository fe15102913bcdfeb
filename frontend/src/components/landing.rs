//! The landing page, composed from the four page regions.

use leptos::*;

use super::{Footer, Header, Hero, TrendingSection};

/// Header, hero, trending row and footer, always in that order.
///
/// Takes no input and holds no state: every render produces the same tree.
#[component]
pub fn LandingPage() -> impl IntoView {
    log::debug!("Rendering landing page");

    view! {
        <div class="flex min-h-screen flex-col bg-background font-sans text-foreground">
            <Header/>
            <main class="container mx-auto flex-1 px-4 py-12">
                <Hero/>
                <TrendingSection/>
            </main>
            <Footer/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;

    #[test]
    fn test_landmarks_appear_once_in_order() {
        let html = render(|| view! { <LandingPage/> });

        for tag in ["<header", "<main", "<footer", "<h1", "<h2"] {
            assert_eq!(html.matches(tag).count(), 1, "{tag}");
        }
        assert_eq!(html.matches(r#"id="hero""#).count(), 1);
        assert_eq!(html.matches(r#"id="trending""#).count(), 1);

        let header = html.find("<header").unwrap();
        let hero = html.find(r#"id="hero""#).unwrap();
        let trending = html.find(r#"id="trending""#).unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(header < hero && hero < trending && trending < footer);
    }

    #[test]
    fn test_regions_sit_inside_main() {
        let html = render(|| view! { <LandingPage/> });

        let main_open = html.find("<main").unwrap();
        let main_close = html.find("</main>").unwrap();
        let hero = html.find(r#"id="hero""#).unwrap();
        let trending = html.find(r#"id="trending""#).unwrap();
        assert!(main_open < hero && trending < main_close);
        assert!(html.find("<footer").unwrap() > main_close);
    }

    #[test]
    fn test_page_contents() {
        let html = render(|| view! { <LandingPage/> });

        assert_eq!(html.matches(r#"data-slot="card""#).count(), 3);
        assert!(html.contains("Sách nói dành cho tâm hồn"));
        assert!(html.contains("Nghe thử ngay"));
        assert!(html.contains(r#"placeholder="Search for audiobooks...""#));
        assert!(html.contains("2026"));
    }

    #[test]
    fn test_nothing_can_submit() {
        let html = render(|| view! { <LandingPage/> });

        assert!(!html.contains("<form"));
        // header 2, hero 1, trending heading 1, cards 3
        assert_eq!(html.matches("<button").count(), 7);
        assert_eq!(html.matches(r#"type="button""#).count(), 7);
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render(|| view! { <LandingPage/> });
        let second = render(|| view! { <LandingPage/> });

        assert_eq!(first, second);
    }
}
