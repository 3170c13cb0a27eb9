//! Cash register settlement: computes correct change for a sale from a till
//! of fixed denominations, greedily spending the largest usable bill first,
//! and classifies the outcome as open, closed, or insufficient funds.
mod denomination;
mod ledger;
mod sale;
mod settlement;
mod state;
mod types;

pub use denomination::*;
pub use ledger::*;
pub use sale::*;
pub use settlement::*;
pub use state::*;
pub use types::*;
