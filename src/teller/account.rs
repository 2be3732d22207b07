use crate::ledger::LedgerError;

use std::fmt;
use std::str::FromStr;

/// The two accounts a ledger owns. Closed set, matched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccountKind {
    Checking,
    Savings,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tag = match self {
            AccountKind::Checking => "checking",
            AccountKind::Savings => "savings",
        };

        return write!(f, "{tag}");
    }
}

impl FromStr for AccountKind {
    type Err = LedgerError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "checking" => Ok(AccountKind::Checking),
            "savings" => Ok(AccountKind::Savings),
            other => Err(LedgerError::InvalidAccountType(format!(
                "'{other}', use 'checking' or 'savings'"
            ))),
        }
    }
}
