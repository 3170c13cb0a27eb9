//! The `Register` drains sale rows from a channel, settles each one
//! against its till, and collects the output records.
use serde::Serialize;
use tokio::sync::mpsc;

use crate::{
    Denomination, Sale, SaleError, Settlement, Status, settle,
    types::{CENTS_PER_DOLLAR, Money},
};

fn serialize_money<S>(money: &Money, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    (*money as f64 / CENTS_PER_DOLLAR).serialize(serializer)
}

/// One output row per settled sale: the status and the change handed back
/// per denomination, rendered in decimal dollars. Denominations not used
/// for change serialize as 0.0.
#[derive(Serialize, Debug)]
pub struct SettlementRecord {
    status: Status,

    #[serde(serialize_with = "serialize_money")]
    penny: Money,

    #[serde(serialize_with = "serialize_money")]
    nickel: Money,

    #[serde(serialize_with = "serialize_money")]
    dime: Money,

    #[serde(serialize_with = "serialize_money")]
    quarter: Money,

    #[serde(serialize_with = "serialize_money")]
    one: Money,

    #[serde(serialize_with = "serialize_money")]
    five: Money,

    #[serde(serialize_with = "serialize_money")]
    ten: Money,

    #[serde(serialize_with = "serialize_money")]
    twenty: Money,

    #[serde(serialize_with = "serialize_money")]
    one_hundred: Money,
}

impl SettlementRecord {
    fn new(settlement: &Settlement) -> Self {
        let mut record = SettlementRecord {
            status: settlement.status,
            penny: 0,
            nickel: 0,
            dime: 0,
            quarter: 0,
            one: 0,
            five: 0,
            ten: 0,
            twenty: 0,
            one_hundred: 0,
        };
        for &(denomination, quantity) in settlement.change() {
            match denomination {
                Denomination::Penny => record.penny = quantity,
                Denomination::Nickel => record.nickel = quantity,
                Denomination::Dime => record.dime = quantity,
                Denomination::Quarter => record.quarter = quantity,
                Denomination::One => record.one = quantity,
                Denomination::Five => record.five = quantity,
                Denomination::Ten => record.ten = quantity,
                Denomination::Twenty => record.twenty = quantity,
                Denomination::OneHundred => record.one_hundred = quantity,
            }
        }
        record
    }

    /// Gets the settlement status of this record.
    pub fn status(&self) -> Status {
        self.status
    }
}

/// Processes sales received over a channel, keeping each settlement
/// independent; the only state carried across rows is the output.
pub struct Register {
    /// Settled records, in input order.
    records: Vec<SettlementRecord>,
    /// A channel receiver for incoming sale rows.
    receiver: mpsc::Receiver<Sale>,
}

impl Register {
    /// Creates a new `Register` with no settled records.
    pub fn new(receiver: mpsc::Receiver<Sale>) -> Self {
        Register {
            records: Vec::new(),
            receiver,
        }
    }

    /// Retrieves all settled records.
    pub fn records(&self) -> &[SettlementRecord] {
        &self.records
    }

    /// Validates and settles a single sale, appending its output record.
    fn process_sale(&mut self, sale: Sale) -> Result<(), SaleError> {
        let till = sale.till()?;
        let settlement = settle(sale.price(), sale.cash(), till);
        self.records.push(SettlementRecord::new(&settlement));
        Ok(())
    }

    /// Runs the processing loop, settling sales from the receiver until
    /// the channel closes. Rejected rows are reported and skipped.
    pub async fn run(&mut self) {
        while let Some(sale) = self.receiver.recv().await {
            if let Err(e) = self.process_sale(sale) {
                eprintln!("Error processing sale: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Sale, Status};

    #[tokio::test]
    async fn test_settles_sales_from_channel() {
        let (sender, receiver) = tokio::sync::mpsc::channel(100);
        let mut register = super::Register::new(receiver);
        assert!(register.records().is_empty());
        sender
            .send(Sale::new(
                326, 10000, 101, 205, 310, 425, 9000, 5500, 2000, 6000, 10000,
            ))
            .await
            .unwrap();
        drop(sender); // Close the sender to signal no more sales will be sent
        register.run().await;
        assert_eq!(register.records().len(), 1);
        assert_eq!(register.records()[0].status(), Status::Open);
        assert_eq!(register.records()[0].twenty, 6000);
        assert_eq!(register.records()[0].penny, 4);
    }

    #[tokio::test]
    async fn test_invalid_sale_is_skipped() {
        let (sender, receiver) = tokio::sync::mpsc::channel(100);
        let mut register = super::Register::new(receiver);
        sender
            .send(Sale::new(10000, 326, 0, 0, 0, 0, 0, 0, 0, 0, 0))
            .await
            .unwrap();
        drop(sender);
        register.run().await;
        assert!(register.records().is_empty());
    }
}
