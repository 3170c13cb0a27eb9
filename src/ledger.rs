//! An immutable ledger of (denomination, cents) entries, sorted largest
//! denomination first. The till and the change handed back are both ledgers;
//! every operation returns a new ledger and leaves the original untouched.
use crate::{Denomination, types::Money};

/// An ordered collection of denomination holdings. Quantities are total
/// cents held in that denomination, always a multiple of its unit value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    /// Entries sorted by descending denomination value, one per
    /// denomination that appears. Zero quantities are kept.
    entries: Vec<(Denomination, Money)>,
}

fn sort_descending(entries: &mut [(Denomination, Money)]) {
    entries.sort_by(|a, b| b.0.value().cmp(&a.0.value()));
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Ledger::default()
    }

    /// Creates a ledger from the given entries, restoring the
    /// descending-value order regardless of input order.
    pub fn from_entries(mut entries: Vec<(Denomination, Money)>) -> Self {
        sort_descending(&mut entries);
        Ledger { entries }
    }

    /// The entries in descending denomination order.
    pub fn entries(&self) -> &[(Denomination, Money)] {
        &self.entries
    }

    /// Returns a new ledger with one unit of the denomination added,
    /// inserting a new entry on first use.
    pub fn add(&self, denomination: Denomination) -> Ledger {
        let mut entries = self.entries.clone();
        match entries.iter().position(|&(d, _)| d == denomination) {
            Some(idx) => entries[idx].1 += denomination.value(),
            None => {
                entries.push((denomination, denomination.value()));
                sort_descending(&mut entries);
            }
        }
        Ledger { entries }
    }

    /// Returns a new ledger with one unit of the denomination removed.
    ///
    /// # Panics
    ///
    /// Panics if the ledger does not hold at least one unit of the
    /// denomination. `next_bill` only ever returns denominations with
    /// remaining quantity, so reaching the panic means the selection
    /// logic is broken.
    pub fn remove(&self, denomination: Denomination) -> Ledger {
        let mut entries = self.entries.clone();
        let entry = entries
            .iter_mut()
            .find(|(d, _)| *d == denomination)
            .unwrap_or_else(|| panic!("till does not contain a {denomination:?}"));
        assert!(
            entry.1 >= denomination.value(),
            "till holds less than one {denomination:?}"
        );
        entry.1 -= denomination.value();
        Ledger { entries }
    }

    /// The greedy selection rule: the largest denomination whose unit value
    /// does not exceed `owed` and which still has quantity remaining, or
    /// `None` if the till has nothing usable.
    pub fn next_bill(&self, owed: Money) -> Option<Denomination> {
        self.entries
            .iter()
            .find(|&&(d, quantity)| d.value() <= owed && quantity > 0)
            .map(|&(d, _)| d)
    }

    /// Total cents held across all entries.
    pub fn total(&self) -> Money {
        self.entries.iter().map(|&(_, quantity)| quantity).sum()
    }

    /// Whether the ledger holds no money at all.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
