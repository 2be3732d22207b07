pub mod account;
pub mod ids;
pub mod ledger;
mod money;
mod record;
mod result;

pub use account::AccountKind;
pub use ledger::{Ledger, LedgerError};
pub use money::{Money, MoneyError};
pub use record::TransactionRecord;
pub use result::Result;
