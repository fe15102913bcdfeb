//! Page components for the AudioBook landing page.
//!
//! # Layout Components
//! - [`Header`] - Brand, search field and auth buttons
//! - [`Hero`] - Headline and call to action
//! - [`TrendingSection`] - Row of sample [`TrendingCard`]s
//! - [`Footer`] - Copyright line
//!
//! # Page
//! - [`LandingPage`] - The four regions above, in order

mod header;
mod hero;
mod trending;
mod footer;
mod landing;

pub use header::*;
pub use hero::*;
pub use trending::*;
pub use footer::*;
pub use landing::*;
