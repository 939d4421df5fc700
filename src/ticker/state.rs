#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TickerPhase {
    Ticker, // Ticker feed owns the strip
    Ad,     // A single stripe ad owns the strip
}
