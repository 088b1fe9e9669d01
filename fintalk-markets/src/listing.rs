//! Static exchange listing backing the `SymbolResolver` capability.
//!
//! No market data, no I/O: a token is "valid" when it is in the built-in
//! or user-extended listing, or when it has the Taiwan numeric-code shape.

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::{Result, bail};
use regex::Regex;

use fintalk_core::SymbolResolver;

/// Bare 4-digit Taiwan code, e.g. `2330`.
static TW_CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}$").unwrap());
/// Already-normalized Taiwan code, e.g. `2330.TW`.
static TW_SUFFIXED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{4}\.TW$").unwrap());
/// Accepted shape for user-extended symbols.
static EXTRA_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z0-9.]{1,10}$").unwrap());

/// Commonly quoted US tickers shipped with the bot. Requests for anything
/// outside this set (and the user's extras) classify as `Unknown`.
const BUILTIN_US: &[&str] = &[
    "AAPL", "MSFT", "GOOG", "GOOGL", "AMZN", "META", "NVDA", "TSLA", "TSM", "AMD", "INTC", "NFLX",
    "DIS", "V", "MA", "JPM", "BRK.B", "KO", "PEP", "COST", "VT", "VTI", "VOO", "QQQ", "SPY",
];

/// `SymbolResolver` backed by a fixed listing plus optional user extras.
#[derive(Debug, Clone)]
pub struct ListingResolver {
    listing: HashSet<String>,
}

impl ListingResolver {
    pub fn new() -> Self {
        ListingResolver {
            listing: BUILTIN_US.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in listing extended with user-configured symbols. Extras are
    /// uppercased; a malformed entry aborts with the offending value so a
    /// config typo is caught at startup rather than silently ignored.
    pub fn with_extra<I, S>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut resolver = Self::new();
        for sym in extra {
            let sym = sym.as_ref().trim().to_uppercase();
            if !EXTRA_RE.is_match(&sym) {
                bail!("invalid symbol in config: {:?}", sym);
            }
            resolver.listing.insert(sym);
        }
        Ok(resolver)
    }
}

impl Default for ListingResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolResolver for ListingResolver {
    fn is_valid_symbol(&self, token: &str) -> bool {
        self.listing.contains(token)
            || TW_CODE_RE.is_match(token)
            || TW_SUFFIXED_RE.is_match(token)
    }

    fn normalize_taiwan(&self, token: &str) -> String {
        if TW_CODE_RE.is_match(token) {
            format!("{token}.TW")
        } else {
            token.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tickers_recognized() {
        let r = ListingResolver::new();
        assert!(r.is_valid_symbol("TSLA"));
        assert!(r.is_valid_symbol("BRK.B"));
        assert!(!r.is_valid_symbol("NOPE"));
        // Listing lookup is on the uppercased token; caller uppercases.
        assert!(!r.is_valid_symbol("tsla"));
    }

    #[test]
    fn test_taiwan_codes_recognized_by_shape() {
        let r = ListingResolver::new();
        assert!(r.is_valid_symbol("2330"));
        assert!(r.is_valid_symbol("0050"));
        assert!(r.is_valid_symbol("2330.TW"));
        assert!(!r.is_valid_symbol("233"));
        assert!(!r.is_valid_symbol("23300"));
    }

    #[test]
    fn test_normalize_taiwan() {
        let r = ListingResolver::new();
        assert_eq!(r.normalize_taiwan("2330"), "2330.TW");
        assert_eq!(r.normalize_taiwan("2330.TW"), "2330.TW");
        assert_eq!(r.normalize_taiwan("TSLA"), "TSLA");
    }

    #[test]
    fn test_with_extra_uppercases_and_validates() {
        let r = ListingResolver::with_extra(["gme", "2603"]).unwrap();
        assert!(r.is_valid_symbol("GME"));
        assert!(r.is_valid_symbol("2603"));

        assert!(ListingResolver::with_extra(["not a symbol"]).is_err());
        assert!(ListingResolver::with_extra([""]).is_err());
    }
}
