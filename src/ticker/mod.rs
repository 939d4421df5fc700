//! Ticker strip that yields to short stripe ads between ticker dwells.

pub mod alternator;
pub mod state;

pub use alternator::{StripeContent, TickerAdAlternator};
pub use state::TickerPhase;
