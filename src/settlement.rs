//! Greedy change-making over a till ledger.
use serde::Serialize;

use crate::{
    Denomination, Ledger,
    types::{Money, cents, dollars},
};

/// Outcome of settling a sale against the till.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The till cannot produce the owed amount with its denominations.
    InsufficientFunds,
    /// The till total exactly equals the owed amount; the drawer closes out.
    Closed,
    /// Change was made and the drawer stays open.
    Open,
}

/// A settled sale: the outcome and the change handed back, largest
/// denomination first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub status: Status,
    change: Vec<(Denomination, Money)>,
}

impl Settlement {
    /// The change entries in cents, descending by denomination value.
    /// Empty when the status is `InsufficientFunds`.
    pub fn change(&self) -> &[(Denomination, Money)] {
        &self.change
    }

    /// The change rendered as decimal dollar amounts for output.
    pub fn change_in_dollars(&self) -> Vec<(Denomination, f64)> {
        self.change
            .iter()
            .map(|&(d, quantity)| (d, dollars(quantity)))
            .collect()
    }
}

/// Settles a sale in cents: computes the owed amount and drains the till
/// greedily, largest usable denomination first, one unit at a time.
pub fn settle(price: Money, cash: Money, till: Ledger) -> Settlement {
    let mut owed = cash - price;

    // Close-out: the drawer holds exactly what is owed, so it is handed
    // back whole without any depletion.
    if till.total() == owed {
        return Settlement {
            status: Status::Closed,
            change: till.entries().to_vec(),
        };
    }

    let mut change = Ledger::new();
    let mut till = till;
    loop {
        if owed == 0 {
            return Settlement {
                status: Status::Open,
                change: change.entries().to_vec(),
            };
        }
        match till.next_bill(owed) {
            // Whatever was accumulated so far cannot reach the owed
            // amount, so it is discarded.
            None => {
                return Settlement {
                    status: Status::InsufficientFunds,
                    change: Vec::new(),
                };
            }
            Some(bill) => {
                change = change.add(bill);
                till = till.remove(bill);
                owed -= bill.value();
            }
        }
    }
}

/// Settles a sale given in decimal dollars. Amounts are rounded to the
/// nearest cent on the way in; all decision logic runs on cents.
pub fn check_cash_register(
    price: f64,
    cash: f64,
    till: &[(Denomination, f64)],
) -> Settlement {
    let till = Ledger::from_entries(
        till.iter()
            .map(|&(d, amount)| (d, cents(amount)))
            .collect(),
    );
    settle(cents(price), cents(cash), till)
}
