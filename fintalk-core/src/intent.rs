//! Chat intent types: the closed set of structured commands the
//! classifier can produce from one line of chat text.

use serde::{Deserialize, Serialize};

use crate::categories::{ExpenseCategory, IncomeCategory};

/// One classified chat message.
///
/// Exactly one `Intent` is produced per input line; classification never
/// fails, unrecognized input is `Unknown`. Amounts and quantities are
/// strictly positive — the sign of the original input is folded into the
/// variant, never carried in the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "kebab-case")]
pub enum Intent {
    /// Bare negative-number shorthand, e.g. `-120` or `-120 計程車`.
    Expense {
        amount: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Bare positive-number shorthand, e.g. `100`, `+5000 年終`.
    Income {
        amount: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// A recognized stock symbol on its own, e.g. `TSLA`.
    StockQuery { symbol: String },
    /// `買 <symbol>` / `買入 <symbol>`.
    BuyAction { symbol: String },
    /// `賣 <symbol>` / `賣出 <symbol>`.
    SellAction { symbol: String },
    /// One-step categorized expense, e.g. `飲食 120 午餐`.
    ExpenseCategory {
        category: ExpenseCategory,
        amount: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// One-step categorized income, e.g. `薪資 50000`.
    IncomeCategory {
        category: IncomeCategory,
        amount: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Bare decimal share count for two-step buy/sell flows.
    QuantityInput { quantity: f64 },
    Help,
    Portfolio,
    AccountList,
    TotalAssets,
    Website,
    Ledger,
    Unknown,
}

impl Intent {
    /// Stable tag name, matching the serde `intent` field.
    pub fn tag(&self) -> &'static str {
        match self {
            Intent::Expense { .. } => "expense",
            Intent::Income { .. } => "income",
            Intent::StockQuery { .. } => "stock-query",
            Intent::BuyAction { .. } => "buy-action",
            Intent::SellAction { .. } => "sell-action",
            Intent::ExpenseCategory { .. } => "expense-category",
            Intent::IncomeCategory { .. } => "income-category",
            Intent::QuantityInput { .. } => "quantity-input",
            Intent::Help => "help",
            Intent::Portfolio => "portfolio",
            Intent::AccountList => "account-list",
            Intent::TotalAssets => "total-assets",
            Intent::Website => "website",
            Intent::Ledger => "ledger",
            Intent::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_json_is_tagged() {
        let i = Intent::Expense {
            amount: 120.0,
            note: Some("計程車".to_string()),
        };
        let v: serde_json::Value = serde_json::to_value(&i).unwrap();
        assert_eq!(v["intent"], "expense");
        assert_eq!(v["amount"], 120.0);
        assert_eq!(v["note"], "計程車");
    }

    #[test]
    fn test_note_omitted_when_absent() {
        let i = Intent::Income {
            amount: 100.0,
            note: None,
        };
        let v: serde_json::Value = serde_json::to_value(&i).unwrap();
        assert!(v.get("note").is_none());
    }

    #[test]
    fn test_tag_matches_serde_tag() {
        let cases = vec![
            Intent::Help,
            Intent::Portfolio,
            Intent::AccountList,
            Intent::TotalAssets,
            Intent::Website,
            Intent::Ledger,
            Intent::Unknown,
            Intent::StockQuery {
                symbol: "2330.TW".to_string(),
            },
        ];
        for i in cases {
            let v: serde_json::Value = serde_json::to_value(&i).unwrap();
            assert_eq!(v["intent"], i.tag());
        }
    }
}
