use teller::{AccountKind, Ledger, LedgerError, Money};

use std::io::Write;
use std::process::{Command, Stdio};

/// The demonstration sequence the console drives, checked step by step.
#[test]
fn demonstration_sequence() {
    let mut ledger = Ledger::new();

    ledger.deposit(Money::from_dollars(1000), AccountKind::Checking).unwrap();
    ledger.deposit(Money::from_dollars(500), AccountKind::Savings).unwrap();

    ledger
        .transfer(
            Money::from_dollars(500),
            AccountKind::Checking,
            AccountKind::Savings,
        )
        .unwrap();
    assert_eq!(ledger.balance(AccountKind::Checking), Money::from_dollars(500));
    assert_eq!(ledger.balance(AccountKind::Savings), Money::from_dollars(1000));

    ledger.deposit(Money::from_dollars(250), AccountKind::Checking).unwrap();
    assert_eq!(ledger.balance(AccountKind::Checking), Money::from_dollars(750));

    ledger.withdraw(Money::from_dollars(500), AccountKind::Savings).unwrap();
    assert_eq!(ledger.balance(AccountKind::Savings), Money::from_dollars(500));

    // One record per committed operation, in invocation order.
    assert_eq!(ledger.len(), 5);

    let lines = ledger.show_records();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("1."));
    assert!(lines[0].contains("Deposit of $1000"));
    assert!(lines[2].contains("$500 transferred from your checking account to savings account"));
    assert!(lines[3].contains("available balance is $750"));
    assert!(lines[4].contains("Withdrawal of $500"));

    let mut sequences: Vec<u64> = ledger.records().map(|record| record.sequence().0).collect();
    assert_eq!(sequences, vec![1, 2, 3, 4, 5]);
    sequences.dedup();
    assert_eq!(sequences.len(), 5);

    assert_eq!(ledger.show_records(), lines);
}

#[test]
fn rejected_operations_change_nothing() {
    let mut ledger = Ledger::new();
    ledger.deposit(Money::from_dollars(500), AccountKind::Savings).unwrap();

    // Boundary: withdrawing the exact balance is rejected.
    let err = ledger
        .withdraw(Money::from_dollars(500), AccountKind::Savings)
        .unwrap_err()
        .downcast::<LedgerError>()
        .unwrap();
    assert_eq!(err, LedgerError::InsufficientFunds(AccountKind::Savings));

    let err = ledger
        .transfer(
            Money::from_dollars(100),
            AccountKind::Checking,
            AccountKind::Checking,
        )
        .unwrap_err()
        .downcast::<LedgerError>()
        .unwrap();
    assert!(matches!(err, LedgerError::InvalidAccountType(_)));

    assert_eq!(ledger.balance(AccountKind::Savings), Money::from_dollars(500));
    assert_eq!(ledger.balance(AccountKind::Checking), Money::ZERO);
    assert_eq!(ledger.len(), 1);
}

/// Drives the built console over stdin, choosing the bank demonstration and
/// then exiting, to prove the whole pipeline works end to end.
#[test]
fn console_runs_the_bank_demonstration() {
    let mut child = Command::new("cargo")
        .args(["run", "--quiet"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(b"2\n3\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();

    println!("{}", String::from_utf8(output.stderr).unwrap());
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Activity history:"));
    assert!(stdout.contains("available balance is $750"));
    assert!(stdout.contains("$500 transferred from your checking account to savings account"));
    assert!(stdout.contains("Exiting the program."));
}
