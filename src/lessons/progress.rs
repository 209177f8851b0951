use serde::Serialize;
use std::fmt;

/// A section counts as seen once its top is above 75% of the viewport.
const SEEN_FRACTION: f64 = 0.75;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathProgress {
    pub seen: usize,
    pub total: usize,
    pub percent: u32,
}

impl PathProgress {
    /// `None` when the page has no tracked sections.
    pub fn measure(section_tops: &[f64], viewport_height: f64) -> Option<Self> {
        if section_tops.is_empty() {
            return None;
        }
        let cutoff = viewport_height * SEEN_FRACTION;
        let seen = section_tops.iter().filter(|&&top| top < cutoff).count();
        let total = section_tops.len();
        Some(Self {
            seen,
            total,
            percent: (seen as f64 / total as f64 * 100.0).round() as u32,
        })
    }
}

impl fmt::Display for PathProgress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% of learning path explored", self.percent)
    }
}
