//! Visual primitives the page is composed from.
//!
//! Small Leptos ports of the shadcn/ui building blocks, styled with Tailwind
//! classes. Every element carries a `data-slot` attribute naming the
//! primitive that produced it.
//!
//! - [`Button`] - Action control with variants and sizes
//! - [`Card`] and its slots - Content container
//! - [`Input`] - Text field
//! - [`Skeleton`] - Loading placeholder
//! - [`icons`] - Lucide glyphs used by the page

mod button;
mod card;
mod class;
mod input;
mod skeleton;
pub mod icons;

pub use button::*;
pub use card::*;
pub use class::*;
pub use input::*;
pub use skeleton::*;
pub use icons::*;
