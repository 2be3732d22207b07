use teller::Result;

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use csv::{Reader, ReaderBuilder, Trim};

use serde::Deserialize;

const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Accepted calendar formats for the date columns. Anything else coerces to
/// `None` and drops out of the date-based aggregates.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"];

/// Lead times further than this many standard deviations from the mean are
/// reported as outliers.
const OUTLIER_Z_SCORE: f64 = 3.0;

/// One row of the warehouse shipment feed
#[derive(Deserialize, Debug, Clone)]
pub struct ShipmentRecord {
    #[serde(rename = "PO NUMBER")]
    pub po_number: String,

    #[serde(rename = "TYPE")]
    pub shipment_type: String,

    #[serde(rename = "WHS")]
    pub warehouse: String,

    #[serde(rename = "VENDOR NUMBER")]
    pub vendor: String,

    #[serde(rename = "BYR")]
    pub buyer: String,

    #[serde(rename = "UPC")]
    pub upc: String,

    #[serde(rename = "PALLET")]
    pub pallets: f64,

    #[serde(rename = "TOTAL CUBE")]
    pub total_cube: f64,

    #[serde(rename = "TOTAL CASES")]
    pub total_cases: f64,

    #[serde(rename = "TOTAL WGHT")]
    pub total_weight: f64,

    #[serde(rename = "CREATION DATE")]
    pub creation_date: String,

    #[serde(rename = "SCHEDULE DATE")]
    pub schedule_date: String,
}

impl ShipmentRecord {
    fn creation(&self) -> Option<NaiveDate> {
        return parse_date(&self.creation_date);
    }

    fn schedule(&self) -> Option<NaiveDate> {
        return parse_date(&self.schedule_date);
    }

    /// Days between creation and schedule; `None` when either date is bad.
    fn lead_time_days(&self) -> Option<i64> {
        return Some((self.schedule()? - self.creation()?).num_days());
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    return DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok());
}

/// Column sums for one grouping key
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShipmentTotals {
    pub pallets: f64,
    pub total_cube: f64,
    pub total_cases: f64,
    pub total_weight: f64,
}

/// Descriptive aggregates over one load of the shipment feed
#[derive(Debug)]
pub struct StoreReport {
    records: Vec<ShipmentRecord>,
}

impl StoreReport {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = ReaderBuilder::new().trim(Trim::All).from_path(path)?;

        let report = Self::from_csv(reader)?;
        log::debug!("Loaded {} shipment records from {path:?}", report.records.len());

        return Ok(report);
    }

    fn from_csv<R: io::Read>(mut reader: Reader<R>) -> Result<Self> {
        let mut records = vec![];

        for record in reader.deserialize::<ShipmentRecord>() {
            match record {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("{e}"),
            }
        }

        return Ok(Self { records });
    }

    /// Purchase-order count per (shipment type, warehouse)
    pub fn po_count_by_type_and_warehouse(&self) -> BTreeMap<(String, String), usize> {
        let mut counts = BTreeMap::new();

        for record in &self.records {
            let key = (record.shipment_type.clone(), record.warehouse.clone());
            *counts.entry(key).or_insert(0) += 1;
        }

        return counts;
    }

    /// Pallet, cube, case, and weight sums per (shipment type, vendor)
    pub fn totals_by_type_and_vendor(&self) -> BTreeMap<(String, String), ShipmentTotals> {
        let mut totals: BTreeMap<(String, String), ShipmentTotals> = BTreeMap::new();

        for record in &self.records {
            let key = (record.shipment_type.clone(), record.vendor.clone());
            let entry = totals.entry(key).or_default();

            entry.pallets += record.pallets;
            entry.total_cube += record.total_cube;
            entry.total_cases += record.total_cases;
            entry.total_weight += record.total_weight;
        }

        return totals;
    }

    /// Mean pallets per weekday of the schedule date (0 = Monday)
    pub fn mean_pallets_by_weekday(&self) -> BTreeMap<u32, f64> {
        let mut sums: BTreeMap<u32, (f64, usize)> = BTreeMap::new();

        for record in &self.records {
            let weekday = match record.schedule() {
                Some(date) => date.weekday().num_days_from_monday(),
                None => continue,
            };

            let entry = sums.entry(weekday).or_insert((0.0, 0));
            entry.0 += record.pallets;
            entry.1 += 1;
        }

        return sums
            .into_iter()
            .map(|(weekday, (sum, count))| (weekday, sum / count as f64))
            .collect();
    }

    /// Mean days between creation and schedule dates over rows with both dates
    pub fn average_lead_time_days(&self) -> Option<f64> {
        let lead_times = self.lead_times();
        if lead_times.is_empty() {
            return None;
        }

        let total: i64 = lead_times.iter().map(|(_, days)| days).sum();
        return Some(total as f64 / lead_times.len() as f64);
    }

    /// Rows whose lead time sits more than three standard deviations from the
    /// mean, with their z-scores
    pub fn lead_time_outliers(&self) -> Vec<(&ShipmentRecord, f64)> {
        let lead_times = self.lead_times();
        if lead_times.is_empty() {
            return vec![];
        }

        let count = lead_times.len() as f64;
        let mean = lead_times.iter().map(|(_, days)| *days as f64).sum::<f64>() / count;
        let variance = lead_times
            .iter()
            .map(|(_, days)| (*days as f64 - mean).powi(2))
            .sum::<f64>()
            / count;
        let std_dev = variance.sqrt();

        if std_dev == 0.0 {
            return vec![];
        }

        return lead_times
            .into_iter()
            .map(|(record, days)| (record, (days as f64 - mean) / std_dev))
            .filter(|(_, z)| z.abs() > OUTLIER_Z_SCORE)
            .collect();
    }

    /// The item with the most total cases ordered, per buyer
    pub fn top_cases_by_buyer(&self) -> BTreeMap<String, (String, f64)> {
        let mut cases: BTreeMap<(String, String), f64> = BTreeMap::new();

        for record in &self.records {
            let key = (record.buyer.clone(), record.upc.clone());
            *cases.entry(key).or_insert(0.0) += record.total_cases;
        }

        let mut top: BTreeMap<String, (String, f64)> = BTreeMap::new();

        for ((buyer, upc), total) in cases {
            match top.get(&buyer) {
                Some((_, best)) if *best >= total => {}
                _ => {
                    top.insert(buyer, (upc, total));
                }
            }
        }

        return top;
    }

    fn lead_times(&self) -> Vec<(&ShipmentRecord, i64)> {
        return self
            .records
            .iter()
            .filter_map(|record| Some((record, record.lead_time_days()?)))
            .collect();
    }

    pub fn print_report(&self) {
        println!("PO count per shipment type and warehouse:");
        for ((shipment_type, warehouse), count) in self.po_count_by_type_and_warehouse() {
            println!("  {shipment_type} / {warehouse}: {count}");
        }
        print_rule();

        println!("Pallet, cube, case, and weight totals per shipment type and vendor:");
        for ((shipment_type, vendor), totals) in self.totals_by_type_and_vendor() {
            println!(
                "  {shipment_type} / {vendor}: pallets {:.1}, cube {:.1}, cases {:.1}, weight {:.1}",
                totals.pallets, totals.total_cube, totals.total_cases, totals.total_weight
            );
        }
        print_rule();

        println!("Mean pallets per weekday of the schedule date:");
        for (weekday, mean) in self.mean_pallets_by_weekday() {
            println!("  {}: {mean:.2}", WEEKDAY_NAMES[weekday as usize]);
        }
        print_rule();

        match self.average_lead_time_days() {
            Some(average) => {
                println!("Average lead time between creation and schedule dates: {average:.2} days")
            }
            None => println!("Average lead time: no rows with both dates"),
        }
        print_rule();

        println!("Lead-time outliers (|z| > {OUTLIER_Z_SCORE}):");
        let outliers = self.lead_time_outliers();
        if outliers.is_empty() {
            println!("  none");
        }
        for (record, z) in outliers {
            println!(
                "  PO {} created {} scheduled {}: z = {z:.2}",
                record.po_number, record.creation_date, record.schedule_date
            );
        }
        print_rule();

        println!("Item with the most total cases per buyer:");
        for (buyer, (upc, total)) in self.top_cases_by_buyer() {
            println!("  {buyer}: UPC {upc} ({total:.0} cases)");
        }
        print_rule();
    }
}

fn print_rule() {
    println!("\n{}\n", "-".repeat(50));
}
