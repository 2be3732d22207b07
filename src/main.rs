mod args;
mod config;
mod store;

use crate::store::StoreReport;

use std::io::{self, BufRead, Write};
use std::path::Path;

use teller::{AccountKind, Ledger, Money, Result};

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Entering menu loop...");

    let shipments_path = args::parse_shipments_arg()?;
    log::debug!("Warehouse data path: {shipments_path:?}");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();

        let choice = match lines.next() {
            Some(line) => line?,
            // End of input ends the session.
            None => break,
        };

        match choice.trim() {
            "1" => {
                println!("\nRunning the warehouse shipment report...\n");
                if let Err(e) = run_store_report(&shipments_path) {
                    println!("Could not build the shipment report: {e}");
                }
            }
            "2" => {
                println!("\nRunning the bank demonstration...");
                run_bank_demo()?;
            }
            "3" => {
                println!("Exiting the program.");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }

    log::debug!("Application finished successfully!");

    return Ok(());
}

fn print_menu() {
    println!();
    println!("*****************************************");
    println!("Welcome to the Teller Console!");
    println!("Please select from the following options");
    println!("1. Warehouse shipment report");
    println!("2. Bank demonstration");
    println!("3. Exit");
    print!("Enter the number of your choice: ");
    let _ = io::stdout().flush();
}

/// A bad or missing data file reports and returns to the menu.
fn run_store_report(path: &Path) -> Result {
    let report = StoreReport::from_path(path)?;
    report.print_report();

    return Ok(());
}

/// The fixed demonstration sequence against a fresh ledger. Ledger errors are
/// not caught here; an invalid call ends the run.
fn run_bank_demo() -> Result {
    let mut ledger = Ledger::new();

    ledger.deposit(Money::from_dollars(1000), AccountKind::Checking)?;
    ledger.deposit(Money::from_dollars(500), AccountKind::Savings)?;
    ledger.transfer(
        Money::from_dollars(500),
        AccountKind::Checking,
        AccountKind::Savings,
    )?;
    ledger.deposit(Money::from_dollars(250), AccountKind::Checking)?;
    ledger.withdraw(Money::from_dollars(500), AccountKind::Savings)?;

    println!("\nActivity history:");
    for line in ledger.show_records() {
        println!("{line}");
    }

    return Ok(());
}
