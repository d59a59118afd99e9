//! The quote-of-the-day table.

use rand::Rng;
use rand::rngs::StdRng;

/// The two quotes on rotation, each picked with equal probability.
pub const QUOTES: &[&str] = &["The die is cast.", "Fortune favors the bold."];

/// Pick the quote of the day.
///
/// A fresh coin flip on every call, so the "day" lasts exactly one request.
pub fn quote_of_the_day(rng: &mut StdRng) -> &'static str {
    if rng.random_bool(0.5) {
        QUOTES[0]
    } else {
        QUOTES[1]
    }
}
