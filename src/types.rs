//! Types used throughout the cash register.

/// Cents per dollar, used to convert decimal dollar values to and from
/// fixed-point cents at the input/output boundary.
pub const CENTS_PER_DOLLAR: f64 = 100.0;

/// Money type, representing an exact amount in cents.
pub type Money = i64;

/// Converts a decimal dollar amount to cents, rounding to the nearest cent.
pub fn cents(dollars: f64) -> Money {
    (dollars * CENTS_PER_DOLLAR).round() as Money
}

/// Converts cents back to a decimal dollar amount. Only applied at the
/// output boundary; all comparisons and accumulation happen on `Money`.
pub fn dollars(amount: Money) -> f64 {
    amount as f64 / CENTS_PER_DOLLAR
}

#[cfg(test)]
mod tests {
    use super::{cents, dollars};

    #[test]
    fn test_cents_rounds_to_nearest() {
        assert_eq!(cents(3.26), 326);
        assert_eq!(cents(96.74), 9674);
        assert_eq!(cents(0.005), 1);
        assert_eq!(cents(0.0), 0);
    }

    #[test]
    fn test_dollars_roundtrip() {
        assert_eq!(dollars(9674), 96.74);
        assert_eq!(cents(dollars(12345)), 12345);
    }
}
