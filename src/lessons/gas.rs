use serde::Serialize;
use std::fmt;

use crate::error::{Result, SandboxError};

pub const DEFAULT_GAS_LIMIT: f64 = 21_000.0;
pub const DEFAULT_GAS_PRICE_GWEI: f64 = 20.0;
const GWEI_PER_ETH: f64 = 1_000_000_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NetworkMood {
    Calm,
    Busy,
    Congested,
}

impl NetworkMood {
    pub fn for_price(price_gwei: f64) -> Self {
        if price_gwei < 20.0 {
            NetworkMood::Calm
        } else if price_gwei < 60.0 {
            NetworkMood::Busy
        } else {
            NetworkMood::Congested
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NetworkMood::Calm => "Calm network 🟢",
            NetworkMood::Busy => "Busy network 🟠",
            NetworkMood::Congested => "High congestion 🔴",
        }
    }
}

/// Fee for one transaction: `limit * price` gwei.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GasQuote {
    pub limit: f64,
    pub price_gwei: f64,
    pub total_gwei: f64,
    pub eth: f64,
    pub mood: NetworkMood,
}

impl GasQuote {
    /// Missing inputs fall back to 21000 gas at 20 gwei.
    pub fn new(limit: Option<f64>, price_gwei: Option<f64>) -> Result<Self> {
        let limit = limit.unwrap_or(DEFAULT_GAS_LIMIT);
        let price_gwei = price_gwei.unwrap_or(DEFAULT_GAS_PRICE_GWEI);
        for (name, v) in [("gas limit", limit), ("gas price", price_gwei)] {
            if !v.is_finite() || v < 0.0 {
                return Err(SandboxError::InvalidInput(format!("{name} must be a non-negative number")));
            }
        }
        let total_gwei = limit * price_gwei;
        Ok(Self {
            limit,
            price_gwei,
            total_gwei,
            eth: total_gwei / GWEI_PER_ETH,
            mood: NetworkMood::for_price(price_gwei),
        })
    }
}

/// en-US style grouping with at most 3 fraction digits, e.g. `1,234.5`.
pub(crate) fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((&rounded, ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    if value < 0.0 && grouped.chars().any(|c| c != '0' && c != '.' && c != ',') {
        grouped.insert(0, '-');
    }
    grouped
}

impl fmt::Display for GasQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} gas × {} gwei = {} gwei ≈ {:.6} ETH",
            group_thousands(self.limit),
            self.price_gwei,
            group_thousands(self.total_gwei),
            self.eth
        )
    }
}
