//! Sale rows as they arrive from CSV input, plus boundary validation.
use serde::{Deserialize, de};
use thiserror::Error;

use crate::{
    Denomination, Ledger,
    types::{CENTS_PER_DOLLAR, Money},
};

/// Custom deserializer converting decimal dollar columns to cents,
/// rounded to the nearest cent.
fn deserialize_money<'de, D>(deserializer: D) -> Result<Money, D::Error>
where
    D: de::Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok((value * CENTS_PER_DOLLAR).round() as Money)
}

/// One sale to settle: the price, the cash tendered, and the drawer
/// contents per denomination. All money columns are read as decimal
/// dollars and stored in cents.
#[derive(Deserialize, Debug, Clone)]
pub struct Sale {
    #[serde(deserialize_with = "deserialize_money")]
    price: Money,

    #[serde(deserialize_with = "deserialize_money")]
    cash: Money,

    #[serde(deserialize_with = "deserialize_money")]
    penny: Money,

    #[serde(deserialize_with = "deserialize_money")]
    nickel: Money,

    #[serde(deserialize_with = "deserialize_money")]
    dime: Money,

    #[serde(deserialize_with = "deserialize_money")]
    quarter: Money,

    #[serde(deserialize_with = "deserialize_money")]
    one: Money,

    #[serde(deserialize_with = "deserialize_money")]
    five: Money,

    #[serde(deserialize_with = "deserialize_money")]
    ten: Money,

    #[serde(deserialize_with = "deserialize_money")]
    twenty: Money,

    #[serde(deserialize_with = "deserialize_money")]
    one_hundred: Money,
}

impl Sale {
    /// Gets the sale price in cents.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Gets the cash tendered in cents.
    pub fn cash(&self) -> Money {
        self.cash
    }

    /// Validates the row and builds the till ledger from the drawer
    /// columns. The settlement core assumes well-formed input, so negative
    /// amounts and short tenders are rejected here at the boundary.
    pub fn till(&self) -> Result<Ledger, SaleError> {
        if self.price < 0 || self.cash < 0 {
            return Err(SaleError::NegativeTender);
        }
        if self.cash < self.price {
            return Err(SaleError::CashBelowPrice);
        }
        let holdings = [
            (Denomination::Penny, self.penny),
            (Denomination::Nickel, self.nickel),
            (Denomination::Dime, self.dime),
            (Denomination::Quarter, self.quarter),
            (Denomination::One, self.one),
            (Denomination::Five, self.five),
            (Denomination::Ten, self.ten),
            (Denomination::Twenty, self.twenty),
            (Denomination::OneHundred, self.one_hundred),
        ];
        if let Some(&(denomination, _)) = holdings.iter().find(|&&(_, amount)| amount < 0) {
            return Err(SaleError::NegativeTillAmount(denomination));
        }
        Ok(Ledger::from_entries(holdings.to_vec()))
    }

    #[cfg(test)]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        price: Money,
        cash: Money,
        penny: Money,
        nickel: Money,
        dime: Money,
        quarter: Money,
        one: Money,
        five: Money,
        ten: Money,
        twenty: Money,
        one_hundred: Money,
    ) -> Self {
        Sale {
            price,
            cash,
            penny,
            nickel,
            dime,
            quarter,
            one,
            five,
            ten,
            twenty,
            one_hundred,
        }
    }
}

/// Errors that can occur when validating a sale row.
#[derive(Error, Debug)]
pub enum SaleError {
    #[error("Negative price or cash tendered")]
    NegativeTender,
    #[error("Cash tendered is below the sale price")]
    CashBelowPrice,
    #[error("Negative till amount for {0:?}")]
    NegativeTillAmount(Denomination),
}

#[cfg(test)]
mod tests {
    use super::{Sale, SaleError};
    use crate::Denomination;

    #[test]
    fn test_deserialize_row_converts_to_cents() {
        let data = "\
price,cash,penny,nickel,dime,quarter,one,five,ten,twenty,one_hundred
3.26,100.00,1.01,2.05,3.10,4.25,90.00,55.00,20.00,60.00,100.00
";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let sale: Sale = reader.deserialize().next().unwrap().unwrap();
        assert_eq!(sale.price(), 326);
        assert_eq!(sale.cash(), 10000);
        assert_eq!(sale.penny, 101);
        assert_eq!(sale.one_hundred, 10000);
    }

    #[test]
    fn test_till_holds_all_nine_denominations() {
        let sale = Sale::new(326, 10000, 101, 205, 310, 425, 9000, 5500, 2000, 6000, 10000);
        let till = sale.till().unwrap();
        assert_eq!(till.entries().len(), 9);
        assert_eq!(till.entries()[0], (Denomination::OneHundred, 10000));
        assert_eq!(till.total(), 33541);
    }

    #[test]
    fn test_negative_till_amount_rejected() {
        let sale = Sale::new(326, 10000, -1, 0, 0, 0, 0, 0, 0, 0, 0);
        assert!(matches!(
            sale.till(),
            Err(SaleError::NegativeTillAmount(Denomination::Penny))
        ));
    }

    #[test]
    fn test_cash_below_price_rejected() {
        let sale = Sale::new(10000, 326, 0, 0, 0, 0, 0, 0, 0, 0, 0);
        assert!(matches!(sale.till(), Err(SaleError::CashBelowPrice)));
    }
}
