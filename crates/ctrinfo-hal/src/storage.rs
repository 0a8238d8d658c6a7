//! Storage media reported by the filesystem service

use serde::{Deserialize, Serialize};

/// Game card in the cartridge slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    /// 3DS game card
    #[default]
    Ctr,
    /// DS / DSi game card
    Twl,
}

impl CardType {
    pub fn label(self) -> &'static str {
        match self {
            CardType::Ctr => "CTR (3DS)",
            CardType::Twl => "TWL (DS)",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_card_is_ctr() {
        assert_eq!(CardType::default(), CardType::Ctr);
    }

    #[test]
    fn test_card_labels() {
        assert_eq!(CardType::Ctr.label(), "CTR (3DS)");
        assert_eq!(CardType::Twl.label(), "TWL (DS)");
    }
}
