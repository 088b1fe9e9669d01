//! Ledger category enumerations.
//!
//! The label strings are load-bearing: they are matched against literal
//! substrings of user input by the classifier and stored downstream as-is,
//! so they must not be renamed or translated.

use serde::{Deserialize, Serialize};

/// Expense categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExpenseCategory {
    #[serde(rename = "飲食")]
    Food,
    #[serde(rename = "交通")]
    Transport,
    #[serde(rename = "居住")]
    Housing,
    #[serde(rename = "娛樂")]
    Entertainment,
    #[serde(rename = "購物")]
    Shopping,
    #[serde(rename = "醫療")]
    Medical,
    #[serde(rename = "投資")]
    Investment,
    #[serde(rename = "其他")]
    Other,
}

impl ExpenseCategory {
    /// Full category list, e.g. for pickers.
    pub const ALL: &'static [ExpenseCategory] = &[
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Housing,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Medical,
        ExpenseCategory::Investment,
        ExpenseCategory::Other,
    ];

    /// The narrower vocabulary accepted by the one-step shorthand
    /// (`飲食 120`). Deliberately excludes 投資: `投資 5000` is not a
    /// one-step expense and falls through the cascade.
    pub const SHORTHAND: &'static [ExpenseCategory] = &[
        ExpenseCategory::Food,
        ExpenseCategory::Transport,
        ExpenseCategory::Housing,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Shopping,
        ExpenseCategory::Medical,
        ExpenseCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "飲食",
            ExpenseCategory::Transport => "交通",
            ExpenseCategory::Housing => "居住",
            ExpenseCategory::Entertainment => "娛樂",
            ExpenseCategory::Shopping => "購物",
            ExpenseCategory::Medical => "醫療",
            ExpenseCategory::Investment => "投資",
            ExpenseCategory::Other => "其他",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

/// Income categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum IncomeCategory {
    #[serde(rename = "薪資")]
    Salary,
    #[serde(rename = "獎金")]
    Bonus,
    #[serde(rename = "股息")]
    Dividend,
    #[serde(rename = "投資獲利")]
    InvestmentGain,
    #[serde(rename = "兼職")]
    SideJob,
    #[serde(rename = "其他")]
    Other,
}

impl IncomeCategory {
    pub const ALL: &'static [IncomeCategory] = &[
        IncomeCategory::Salary,
        IncomeCategory::Bonus,
        IncomeCategory::Dividend,
        IncomeCategory::InvestmentGain,
        IncomeCategory::SideJob,
        IncomeCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            IncomeCategory::Salary => "薪資",
            IncomeCategory::Bonus => "獎金",
            IncomeCategory::Dividend => "股息",
            IncomeCategory::InvestmentGain => "投資獲利",
            IncomeCategory::SideJob => "兼職",
            IncomeCategory::Other => "其他",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for c in ExpenseCategory::ALL {
            assert_eq!(ExpenseCategory::from_label(c.label()), Some(*c));
        }
        for c in IncomeCategory::ALL {
            assert_eq!(IncomeCategory::from_label(c.label()), Some(*c));
        }
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ExpenseCategory::Food).unwrap();
        assert_eq!(json, "\"飲食\"");
        let back: IncomeCategory = serde_json::from_str("\"投資獲利\"").unwrap();
        assert_eq!(back, IncomeCategory::InvestmentGain);
    }

    #[test]
    fn test_shorthand_excludes_investment() {
        assert!(!ExpenseCategory::SHORTHAND.contains(&ExpenseCategory::Investment));
        assert!(ExpenseCategory::ALL.contains(&ExpenseCategory::Investment));
        assert_eq!(
            ExpenseCategory::SHORTHAND.len(),
            ExpenseCategory::ALL.len() - 1
        );
    }

    #[test]
    fn test_unknown_label_rejected() {
        assert_eq!(ExpenseCategory::from_label("午餐"), None);
        assert_eq!(IncomeCategory::from_label("薪水"), None);
    }
}
