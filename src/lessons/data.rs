use serde::Serialize;
use std::str::FromStr;

use crate::error::SandboxError;

/// Where a piece of data lives in the on-chain/off-chain toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataMode {
    OnChain,
    OffChain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataExample {
    pub mode: DataMode,
    pub title: &'static str,
    pub text: &'static str,
}

impl DataMode {
    pub fn example(self) -> DataExample {
        let (title, text) = match self {
            DataMode::OnChain => (
                "On-chain example",
                "Sending ETH, minting an NFT, or executing a smart contract. Visible to everyone through an explorer. Slower and costs fees, but highly transparent.",
            ),
            DataMode::OffChain => (
                "Off-chain example",
                "Discussing price in a chat, storing profile pictures on cloud storage, or calculating analytics privately. Fast and cheap, but less trustless.",
            ),
        };
        DataExample {
            mode: self,
            title,
            text,
        }
    }
}

impl FromStr for DataMode {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "on-chain" | "onchain" => Ok(DataMode::OnChain),
            "off" | "off-chain" | "offchain" => Ok(DataMode::OffChain),
            other => Err(SandboxError::InvalidInput(format!("unknown data mode: {other}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DataMode;

    #[test]
    fn parses_toggle_values() {
        assert_eq!("on".parse::<DataMode>().unwrap(), DataMode::OnChain);
        assert_eq!("OFF".parse::<DataMode>().unwrap(), DataMode::OffChain);
        assert!("sideways".parse::<DataMode>().is_err());
    }

    #[test]
    fn examples_differ_by_mode() {
        assert_eq!(DataMode::OnChain.example().title, "On-chain example");
        assert!(DataMode::OffChain.example().text.contains("less trustless"));
    }
}
