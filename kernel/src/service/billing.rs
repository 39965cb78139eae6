use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Tax applied to every bill (18% GST).
pub const TAX_RATE: Decimal = dec!(0.18);

/// Every stay bills at least one night, even a same-day checkout.
pub const MIN_NIGHTS: i64 = 1;

/// Whole nights between two instants, counted on calendar days.
/// Both instants are truncated to their calendar day before differencing,
/// so a 23:00 check-in followed by a 01:00 checkout still counts the
/// night in between. The result is clamped to [`MIN_NIGHTS`].
pub fn nights_between(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let nights = (check_out.date_naive() - check_in.date_naive()).num_days();
    nights.max(MIN_NIGHTS)
}

/// Line items of a checkout bill. All amounts carry two-digit rounding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bill {
    pub nights: i64,
    pub price_per_night: Decimal,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

impl Bill {
    pub fn compute(nights: i64, price_per_night: Decimal) -> Self {
        let subtotal = (price_per_night * Decimal::from(nights)).round_dp(2);
        let tax = (subtotal * TAX_RATE).round_dp(2);
        let total = subtotal + tax;
        Self {
            nights,
            price_per_night,
            subtotal,
            tax,
            total,
        }
    }
}
