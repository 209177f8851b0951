use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyScore {
    pub checked: usize,
    pub total: usize,
    pub percent: u32,
    pub note: &'static str,
}

impl SafetyScore {
    /// Tally a wallet-safety checklist. An empty checklist scores 0.
    pub fn tally(checks: &[bool]) -> Self {
        let total = checks.len();
        let checked = checks.iter().filter(|&&c| c).count();
        let percent = if total == 0 {
            0
        } else {
            (checked as f64 / total as f64 * 100.0).round() as u32
        };
        let note = match percent {
            0..=39 => "Needs immediate work",
            40..=79 => "Solid but improve backup rigor",
            _ => "Strong baseline safety",
        };
        Self {
            checked,
            total,
            percent,
            note,
        }
    }
}

impl fmt::Display for SafetyScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Safety readiness: {}% — {}", self.percent, self.note)
    }
}
