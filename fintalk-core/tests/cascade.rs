//! End-to-end cascade behavior with a stub symbol listing: precedence
//! across rules, JSON shape of classified intents, and totality.

use std::collections::HashSet;

use fintalk_core::{Classifier, Intent, SymbolResolver, validate_amount, validate_quantity};

struct StubResolver {
    known: HashSet<&'static str>,
}

impl SymbolResolver for StubResolver {
    fn is_valid_symbol(&self, token: &str) -> bool {
        self.known.contains(token)
    }

    fn normalize_taiwan(&self, token: &str) -> String {
        if token.len() == 4 && token.chars().all(|c| c.is_ascii_digit()) {
            format!("{token}.TW")
        } else {
            token.to_string()
        }
    }
}

fn resolver() -> StubResolver {
    StubResolver {
        known: ["TSLA", "AAPL", "VT", "2330"].into_iter().collect(),
    }
}

#[test]
fn bookkeeping_wins_over_numeric_stock_codes() {
    let r = resolver();
    let c = Classifier::new(&r);

    // A bare numeric code is a ledger entry even when listed...
    assert_eq!(
        c.classify("2330"),
        Intent::Income {
            amount: 2330.0,
            note: None
        }
    );
    // ...and only the explicit verbs reach the listing for it.
    assert_eq!(
        c.classify("買 2330"),
        Intent::BuyAction {
            symbol: "2330.TW".to_string()
        }
    );
    assert_eq!(
        c.classify("賣 2330"),
        Intent::SellAction {
            symbol: "2330.TW".to_string()
        }
    );
}

#[test]
fn alphabetic_symbols_are_quotes_but_never_amounts() {
    let r = resolver();
    let c = Classifier::new(&r);

    assert_eq!(
        c.classify("vt"),
        Intent::StockQuery {
            symbol: "VT".to_string()
        }
    );
    // Unlisted alphabetic tokens fall all the way through.
    assert_eq!(c.classify("NOPE"), Intent::Unknown);
}

#[test]
fn ledger_shorthand_and_validators_compose() {
    let r = resolver();
    let c = Classifier::new(&r);

    match c.classify("飲食 120 午餐") {
        Intent::ExpenseCategory { amount, note, .. } => {
            assert!(validate_amount(amount).is_valid());
            assert_eq!(note.as_deref(), Some("午餐"));
        }
        other => panic!("unexpected intent: {other:?}"),
    }

    match c.classify("10.1234") {
        Intent::QuantityInput { quantity } => {
            assert!(validate_quantity(quantity).is_valid());
        }
        other => panic!("unexpected intent: {other:?}"),
    }
}

#[test]
fn classified_intent_serializes_with_tag() {
    let r = resolver();
    let c = Classifier::new(&r);

    let v = serde_json::to_value(c.classify("-120 計程車")).unwrap();
    assert_eq!(v["intent"], "expense");
    assert_eq!(v["amount"], 120.0);
    assert_eq!(v["note"], "計程車");

    let v = serde_json::to_value(c.classify("買入 TSLA")).unwrap();
    assert_eq!(v["intent"], "buy-action");
    assert_eq!(v["symbol"], "TSLA");

    let v = serde_json::to_value(c.classify("什麼東西")).unwrap();
    assert_eq!(v["intent"], "unknown");
}

#[test]
fn every_line_yields_exactly_one_intent() {
    let r = resolver();
    let c = Classifier::new(&r);

    let lines = [
        "",
        " ",
        "-120",
        "+100 牛肉麵",
        "2330",
        "TSLA",
        "買 2330",
        "賣出 AAPL",
        "飲食 120",
        "薪資 50000",
        "10.1234",
        "說明",
        "帳戶",
        "資產",
        "持倉",
        "網站",
        "記帳",
        "隨便說點什麼",
        "🚀🚀",
        "買賣買賣",
    ];
    for line in lines {
        // Structural equality across repeated calls, never a panic.
        assert_eq!(c.classify(line), c.classify(line), "line={line:?}");
    }
}
