//! Display types for the landing page.
//!
//! The page has no runtime data. The only "model" is the fixed trending row,
//! three sample entries repeated from a literal index sequence.

/// Indices of the sample cards in the trending row.
///
/// Only used to repeat the card shell; never looked up.
pub const TRENDING_INDICES: [u8; 3] = [1, 2, 3];

/// One card of the trending row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrendingEntry {
    /// Position in [`TRENDING_INDICES`]
    pub index: u8,
    /// Book title, suffixed with the index
    pub title: String,
    /// Author line
    pub author: &'static str,
    /// Listening time, e.g. `4h 32m`
    pub duration: &'static str,
}

impl TrendingEntry {
    /// Sample entry for a given card index.
    pub fn sample(index: u8) -> Self {
        Self {
            index,
            title: format!("The Art of Stillness {}", index),
            author: "Pico Iyer",
            duration: "4h 32m",
        }
    }

    /// All trending entries, in index order.
    pub fn trending() -> Vec<Self> {
        TRENDING_INDICES.iter().copied().map(Self::sample).collect()
    }
}
