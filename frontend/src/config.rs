//! Application configuration.
//!
//! Centralized constants for the AudioBook landing page. Everything on the
//! page is literal, so there is nothing to load at runtime.

/// Brand name shown in the header and the document title.
pub const APP_NAME: &str = "AudioBook";

/// Content of the `description` meta tag.
pub const APP_DESCRIPTION: &str = "Sách nói dành cho tâm hồn";

/// Placeholder of the header search field.
pub const SEARCH_PLACEHOLDER: &str = "Search for audiobooks...";

/// Year printed in the footer.
pub const COPYRIGHT_YEAR: u16 = 2026;

/// Footer copyright line.
pub const COPYRIGHT_NOTICE: &str =
    "© 2026 AudioBook Project. Built with Next.js, Shadcn/UI and Tailwind CSS 4.";

/// Console log level set up by the entry point.
pub const LOG_LEVEL: log::Level = log::Level::Debug;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_mentions_year() {
        assert!(COPYRIGHT_NOTICE.contains(&COPYRIGHT_YEAR.to_string()));
        assert!(COPYRIGHT_NOTICE.contains(APP_NAME));
    }
}
