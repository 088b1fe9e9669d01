//! fintalk-markets: concrete symbol listing for the fintalk classifier.

pub mod listing;

pub use listing::ListingResolver;
