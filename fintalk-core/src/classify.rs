//! Deterministic chat intent classification.
//!
//! An ordered cascade of pattern rules over one trimmed line of text,
//! first structural match wins. No scoring, no backtracking, no LLM:
//! O(rules) per call and fully reproducible.

use std::sync::LazyLock;

use regex::Regex;

use crate::categories::{ExpenseCategory, IncomeCategory};
use crate::intent::Intent;
use crate::symbols::SymbolResolver;

// Rule 1: bare signed/unsigned amount, optional verbatim trailing note.
// The leading `+` form is a separate rule below.
static BARE_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<sign>-)?(?P<num>\d+(?:\.\d{1,2})?)(?:\s+(?P<note>\S.*))?$").unwrap()
});

// Rule 2: explicit-plus income.
static PLUS_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+(?P<num>\d+(?:\.\d{1,2})?)(?:\s+(?P<note>\S.*))?$").unwrap()
});

// Rules 4/5: single- or two-character verb, then a symbol token.
static BUY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^買入?\s+(?P<sym>[A-Za-z0-9]+)$").unwrap());
static SELL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^賣出?\s+(?P<sym>[A-Za-z0-9]+)$").unwrap());

// Rules 6/7: one-step categorized entry. Built from the shorthand
// vocabularies so the alternation and the enum cannot drift apart.
static EXPENSE_SHORTHAND_RE: LazyLock<Regex> =
    LazyLock::new(|| shorthand_regex(ExpenseCategory::SHORTHAND.iter().map(|c| c.label())));
static INCOME_SHORTHAND_RE: LazyLock<Regex> =
    LazyLock::new(|| shorthand_regex(IncomeCategory::ALL.iter().map(|c| c.label())));

// Rule 8: broader decimal precision for share counts.
static QUANTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<num>\d+(?:\.\d{1,4})?)$").unwrap());

fn shorthand_regex<'a>(labels: impl Iterator<Item = &'a str>) -> Regex {
    let alternation = labels.collect::<Vec<_>>().join("|");
    Regex::new(&format!(
        r"^(?P<cat>{alternation})\s+(?P<num>\d+(?:\.\d{{1,2}})?)(?:\s+(?P<note>\S.*))?$"
    ))
    .unwrap()
}

/// One cascade rule: returns `Some(intent)` if it claims the input.
type Rule = fn(&dyn SymbolResolver, &str) -> Option<Intent>;

/// Cascade order is the entire design. Earlier rules shadow later ones for
/// any input they accept; reorder only with a product decision.
const RULES: &[Rule] = &[
    rule_bare_amount,
    rule_plus_amount,
    rule_symbol_query,
    rule_buy,
    rule_sell,
    rule_expense_shorthand,
    rule_income_shorthand,
    rule_quantity,
    rule_keywords,
];

/// Pure, total intent classifier.
///
/// Holds only the injected symbol capability; safe to share across threads
/// and call concurrently.
pub struct Classifier<'a> {
    resolver: &'a dyn SymbolResolver,
}

impl<'a> Classifier<'a> {
    pub fn new(resolver: &'a dyn SymbolResolver) -> Self {
        Classifier { resolver }
    }

    /// Classify one line of chat text. Never panics; every input maps to
    /// exactly one `Intent`, with `Unknown` as the fallback.
    pub fn classify(&self, text: &str) -> Intent {
        let text = text.trim();
        if text.is_empty() {
            return Intent::Unknown;
        }
        for rule in RULES {
            if let Some(intent) = rule(self.resolver, text) {
                return intent;
            }
        }
        Intent::Unknown
    }
}

fn rule_bare_amount(_: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let caps = BARE_AMOUNT_RE.captures(text)?;
    let amount: f64 = caps["num"].parse().ok()?;
    // Zero is not a ledger entry; let it continue down the cascade.
    if amount == 0.0 {
        return None;
    }
    let note = caps.name("note").map(|m| m.as_str().to_string());
    if caps.name("sign").is_some() {
        Some(Intent::Expense { amount, note })
    } else {
        Some(Intent::Income { amount, note })
    }
}

fn rule_plus_amount(_: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let caps = PLUS_AMOUNT_RE.captures(text)?;
    let amount: f64 = caps["num"].parse().ok()?;
    if amount == 0.0 {
        return None;
    }
    let note = caps.name("note").map(|m| m.as_str().to_string());
    Some(Intent::Income { amount, note })
}

// Bookkeeping takes priority over bare numeric stock codes: `2330` on its
// own was already claimed as income by rule 1 and never reaches this rule.
// Numeric codes are only quotable through the explicit verbs below.
fn rule_symbol_query(resolver: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let token = text.to_uppercase();
    if resolver.is_valid_symbol(&token) {
        Some(Intent::StockQuery {
            symbol: resolver.normalize_taiwan(&token),
        })
    } else {
        None
    }
}

fn rule_buy(resolver: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let caps = BUY_RE.captures(text)?;
    Some(Intent::BuyAction {
        symbol: resolver.normalize_taiwan(&caps["sym"].to_uppercase()),
    })
}

fn rule_sell(resolver: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let caps = SELL_RE.captures(text)?;
    Some(Intent::SellAction {
        symbol: resolver.normalize_taiwan(&caps["sym"].to_uppercase()),
    })
}

fn rule_expense_shorthand(_: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let caps = EXPENSE_SHORTHAND_RE.captures(text)?;
    let amount: f64 = caps["num"].parse().ok()?;
    if amount == 0.0 {
        return None;
    }
    Some(Intent::ExpenseCategory {
        category: ExpenseCategory::from_label(&caps["cat"])?,
        amount,
        note: caps.name("note").map(|m| m.as_str().to_string()),
    })
}

fn rule_income_shorthand(_: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let caps = INCOME_SHORTHAND_RE.captures(text)?;
    let amount: f64 = caps["num"].parse().ok()?;
    if amount == 0.0 {
        return None;
    }
    Some(Intent::IncomeCategory {
        category: IncomeCategory::from_label(&caps["cat"])?,
        amount,
        note: caps.name("note").map(|m| m.as_str().to_string()),
    })
}

// Shadowed by the bare-amount rule for integers and 1-2 decimal inputs,
// so in practice only 3-4 decimal share counts (`0.125`, `10.1234`) land
// here. Known precedence artifact; two-step flows compensate by also
// accepting the income shape as a quantity. Do not reorder.
fn rule_quantity(_: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let caps = QUANTITY_RE.captures(text)?;
    let quantity: f64 = caps["num"].parse().ok()?;
    if quantity == 0.0 {
        return None;
    }
    Some(Intent::QuantityInput { quantity })
}

// Rule 9: case-insensitive substring membership, disjoint keyword sets.
const KEYWORD_SETS: &[(&[&str], Intent)] = &[
    (&["說明", "幫助", "help"], Intent::Help),
    (&["帳戶", "帳號", "account"], Intent::AccountList),
    (&["資產", "淨值", "net worth"], Intent::TotalAssets),
    (&["持倉", "投資組合", "portfolio"], Intent::Portfolio),
    (&["網站", "website"], Intent::Website),
    (&["記帳", "帳本", "ledger"], Intent::Ledger),
];

fn rule_keywords(_: &dyn SymbolResolver, text: &str) -> Option<Intent> {
    let lower = text.to_lowercase();
    for (keywords, intent) in KEYWORD_SETS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return Some(intent.clone());
        }
    }
    None
}
