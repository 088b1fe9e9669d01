//! Symbol validity/normalization capability consumed by the classifier.
//!
//! Exchange-listing logic lives outside this crate (see `fintalk-markets`);
//! the classifier only needs to know *that* a token looks tradable.

/// Capability for deciding whether an uppercase token is a tradable symbol
/// and for canonicalizing it.
pub trait SymbolResolver {
    /// Whether `token` (already uppercased by the caller) is a recognized
    /// stock symbol.
    fn is_valid_symbol(&self, token: &str) -> bool;

    /// Canonical form of a symbol: bare 4-digit Taiwan numeric codes get a
    /// `.TW` suffix (`2330` → `2330.TW`), everything else passes through
    /// unchanged.
    fn normalize_taiwan(&self, token: &str) -> String;
}
