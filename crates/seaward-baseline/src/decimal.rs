//! Decimal arithmetic helpers shared by the computation crates.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

/// Round to 2 decimal places, half away from zero.
///
/// Display-style rounding: -11.485 becomes -11.49, not the banker's
/// -11.48 that `round_dp` would produce.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// `base^exp` for the DWT size-adjustment term.
///
/// An exponent of zero short-circuits to 1 (no size adjustment), which
/// also covers the neutral zero-coefficient fallback without touching the
/// base. Non-finite intermediate results are not expected for valid DWT
/// ranges; the checked power degrades to zero rather than panicking.
pub fn dwt_pow(base: Decimal, exp: Decimal) -> Decimal {
    if exp.is_zero() {
        return Decimal::ONE;
    }
    base.checked_powd(exp).unwrap_or(Decimal::ZERO)
}
