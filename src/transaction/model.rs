use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SandboxError};

pub const DEFAULT_FROM: &str = "Alice";
pub const DEFAULT_TO: &str = "Bob";
pub const DEFAULT_AMOUNT: f64 = 1.0;
pub const DEFAULT_FEE: f64 = 1.0;

/// A pending demo transaction. No balances or signatures are checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoTx {
    pub id: String,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub fee: f64,
    pub received_at: i64, // Unix timestamp (UTC)
}

/// Form fields as submitted; any of them may be left blank.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TxDraft {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<f64>,
    pub fee: Option<f64>,
}

fn name_or(value: Option<&str>, default: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn number_or(value: Option<f64>, default: f64, field: &str) -> Result<f64> {
    let v = value.unwrap_or(default);
    if !v.is_finite() || v < 0.0 {
        return Err(SandboxError::InvalidInput(format!("{field} must be a non-negative number")));
    }
    Ok(v)
}

impl DemoTx {
    /// Fill blanks with the demo defaults and stamp an id.
    pub fn from_draft(draft: &TxDraft) -> Result<Self> {
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            from: name_or(draft.from.as_deref(), DEFAULT_FROM),
            to: name_or(draft.to.as_deref(), DEFAULT_TO),
            amount: number_or(draft.amount, DEFAULT_AMOUNT, "amount")?,
            fee: number_or(draft.fee, DEFAULT_FEE, "fee")?,
            received_at: Utc::now().timestamp(),
        })
    }
}

/// Width in pixels of the fee bar next to a transaction.
pub fn fee_bar_width(fee: f64) -> u32 {
    (fee * 8.0).clamp(10.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::{DemoTx, TxDraft, fee_bar_width};
    use crate::error::SandboxError;

    #[test]
    fn blank_draft_uses_defaults() {
        let tx = DemoTx::from_draft(&TxDraft {
            from: Some("  ".into()),
            ..TxDraft::default()
        })
        .unwrap();
        assert_eq!(tx.from, "Alice");
        assert_eq!(tx.to, "Bob");
        assert_eq!(tx.amount, 1.0);
        assert_eq!(tx.fee, 1.0);
        assert!(!tx.id.is_empty());
    }

    #[test]
    fn negative_fee_is_rejected() {
        let err = DemoTx::from_draft(&TxDraft {
            fee: Some(-2.0),
            ..TxDraft::default()
        })
        .unwrap_err();
        assert!(matches!(err, SandboxError::InvalidInput(_)));
    }

    #[test]
    fn fee_bar_is_clamped() {
        assert_eq!(fee_bar_width(0.0), 10);
        assert_eq!(fee_bar_width(1.0), 10);
        assert_eq!(fee_bar_width(5.0), 40);
        assert_eq!(fee_bar_width(50.0), 100);
    }
}
