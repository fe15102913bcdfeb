//! AudioBook - Leptos landing page
//!
//! A static marketing page for an audiobook product, compiled to
//! WebAssembly and bundled with trunk.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LandingPage                                                 │
//! │  ├── Header (brand, search field, auth buttons)             │
//! │  ├── main                                                    │
//! │  │   ├── Hero (headline, call to action)                    │
//! │  │   └── TrendingSection (3 × TrendingCard)                 │
//! │  └── Footer                                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - The trending row entries
//! - [`ui`] - Visual primitives (Button, Card, Input, Skeleton, icons)
//! - [`components`] - Page regions and the page itself

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod ui;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{TrendingEntry, TRENDING_INDICES};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Html lang="en"/>
        <Title text=APP_NAME/>
        <Meta name="description" content=APP_DESCRIPTION/>
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
            </Routes>
        </Router>
    }
}

/// Render a view to an HTML string, for structural assertions in tests.
#[cfg(test)]
pub(crate) fn render<F, N>(f: F) -> String
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    leptos_dom::ssr::render_to_string(f).to_string()
}
