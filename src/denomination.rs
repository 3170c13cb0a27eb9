//! The closed set of denominations a till can hold.
use serde::{Deserialize, Serialize};

use crate::types::Money;

/// One of the nine denominations recognized by the register, from the penny
/// up to the hundred-dollar bill.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Denomination {
    Penny,
    Nickel,
    Dime,
    Quarter,
    One,
    Five,
    Ten,
    Twenty,
    #[serde(rename = "ONE HUNDRED")]
    OneHundred,
}

impl Denomination {
    /// All denominations, largest first. Greedy selection and ledger
    /// ordering both follow this order.
    pub const DESCENDING: [Denomination; 9] = [
        Denomination::OneHundred,
        Denomination::Twenty,
        Denomination::Ten,
        Denomination::Five,
        Denomination::One,
        Denomination::Quarter,
        Denomination::Dime,
        Denomination::Nickel,
        Denomination::Penny,
    ];

    /// The value of one unit of this denomination, in cents.
    pub fn value(self) -> Money {
        match self {
            Denomination::Penny => 1,
            Denomination::Nickel => 5,
            Denomination::Dime => 10,
            Denomination::Quarter => 25,
            Denomination::One => 100,
            Denomination::Five => 500,
            Denomination::Ten => 1000,
            Denomination::Twenty => 2000,
            Denomination::OneHundred => 10000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Denomination;

    #[test]
    fn test_values() {
        assert_eq!(Denomination::Penny.value(), 1);
        assert_eq!(Denomination::Nickel.value(), 5);
        assert_eq!(Denomination::Dime.value(), 10);
        assert_eq!(Denomination::Quarter.value(), 25);
        assert_eq!(Denomination::One.value(), 100);
        assert_eq!(Denomination::Five.value(), 500);
        assert_eq!(Denomination::Ten.value(), 1000);
        assert_eq!(Denomination::Twenty.value(), 2000);
        assert_eq!(Denomination::OneHundred.value(), 10000);
    }

    #[test]
    fn test_descending_covers_all_and_is_sorted() {
        assert_eq!(Denomination::DESCENDING.len(), 9);
        for pair in Denomination::DESCENDING.windows(2) {
            assert!(pair[0].value() > pair[1].value());
        }
    }
}
