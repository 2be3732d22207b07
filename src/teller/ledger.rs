use crate::account::AccountKind;
use crate::ids::SequenceNumber;
use crate::record::TransactionRecord;
use crate::{Money, Result};

use std::collections::BTreeMap;

use chrono::Local;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient funds in your {0} account")]
    InsufficientFunds(AccountKind),

    #[error("Invalid account selection: {0}")]
    InvalidAccountType(String),
}

/// Two fixed accounts plus an append-only, time-ordered transaction log.
///
/// Every operation is a single atomic transition: it either commits (balances
/// updated, one record appended) or rejects with no state change at all. The
/// counter and log are instance fields, so separate ledgers are independent.
#[derive(Debug)]
pub struct Ledger {
    checking: Money,
    savings: Money,
    log: BTreeMap<SequenceNumber, TransactionRecord>,
    next_sequence: SequenceNumber,
}

impl Ledger {
    pub fn new() -> Self {
        return Self {
            checking: Money::ZERO,
            savings: Money::ZERO,
            log: BTreeMap::new(),
            next_sequence: SequenceNumber(1),
        };
    }

    pub fn balance(&self, kind: AccountKind) -> Money {
        match kind {
            AccountKind::Checking => self.checking,
            AccountKind::Savings => self.savings,
        }
    }

    fn set_balance(&mut self, kind: AccountKind, balance: Money) {
        match kind {
            AccountKind::Checking => self.checking = balance,
            AccountKind::Savings => self.savings = balance,
        }
    }

    /// Credits `amount` to the selected account.
    ///
    /// Deposits carry no sign check: a negative amount is accepted and
    /// decreases the balance. The only failure is arithmetic overflow.
    pub fn deposit(&mut self, amount: Money, kind: AccountKind) -> Result {
        log::debug!("Depositing {amount} to the {kind} account");

        let mut balance = self.balance(kind);
        balance.add(&amount)?;

        self.set_balance(kind, balance);
        self.record(format!(
            "Deposit of ${amount} has been credited to your {kind} account, available balance is ${balance}"
        ));

        return Ok(());
    }

    /// Debits `amount` from the selected account.
    ///
    /// The amount must lie strictly inside `(0, balance)`: withdrawing the
    /// exact balance is rejected, as is a zero or negative amount.
    pub fn withdraw(&mut self, amount: Money, kind: AccountKind) -> Result {
        log::debug!("Withdrawing {amount} from the {kind} account");

        let mut balance = self.balance(kind);
        if amount <= Money::ZERO || amount >= balance {
            Err(LedgerError::InsufficientFunds(kind))?
        }
        balance.sub(&amount)?;

        self.set_balance(kind, balance);
        self.record(format!(
            "Withdrawal of ${amount} has been debited from your {kind} account, available balance is ${balance}"
        ));

        return Ok(());
    }

    /// Moves `amount` between the two accounts, in either direction.
    ///
    /// Same bound as [`Ledger::withdraw`]: the amount must lie strictly
    /// inside `(0, source balance)`. Exactly one record is appended.
    pub fn transfer(&mut self, amount: Money, from: AccountKind, to: AccountKind) -> Result {
        log::debug!("Transferring {amount} from the {from} account to the {to} account");

        match (from, to) {
            (AccountKind::Checking, AccountKind::Savings)
            | (AccountKind::Savings, AccountKind::Checking) => {}
            (from, to) => Err(LedgerError::InvalidAccountType(format!(
                "cannot transfer from {from} to {to}"
            )))?,
        }

        let mut source = self.balance(from);
        if amount <= Money::ZERO || amount >= source {
            Err(LedgerError::InsufficientFunds(from))?
        }

        let mut destination = self.balance(to);
        source.sub(&amount)?;
        destination.add(&amount)?;

        // Both new balances are known before either account is touched.
        self.set_balance(from, source);
        self.set_balance(to, destination);
        self.record(format!(
            "${amount} transferred from your {from} account to {to} account"
        ));

        return Ok(());
    }

    /// The full history as formatted lines, oldest first. Read-only;
    /// repeated calls with no intervening mutation return identical output.
    pub fn show_records(&self) -> Vec<String> {
        return self.log.values().map(|record| record.to_string()).collect();
    }

    pub fn records(&self) -> impl Iterator<Item = &TransactionRecord> {
        return self.log.values();
    }

    pub fn len(&self) -> usize {
        return self.log.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }

    fn record(&mut self, description: String) {
        let sequence = self.next_sequence;
        self.next_sequence = sequence.next();

        let record = TransactionRecord::new(sequence, Local::now(), description);
        self.log.insert(sequence, record);
    }
}

impl Default for Ledger {
    fn default() -> Self {
        return Self::new();
    }
}
