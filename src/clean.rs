//! Per-source record cleaning.
//!
//! Each cleaner normalizes header names, checks the required column set,
//! applies the manufacturer and model-code normalizers, and produces typed
//! records with a common `(year, make, model)` shape. Missing columns and
//! unparsable event dates are fatal; everything else degrades to a missing
//! or empty value.

use crate::error::PipelineError;
use crate::normalize::{
    extract_model_code, normalize_manufacturer_accidents, normalize_manufacturer_inventory,
};
use crate::parser::RawTable;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

/// One accident event, cleaned. Only non-amateur-built aircraft are retained.
#[derive(Debug, Clone, Serialize)]
pub struct AccidentRecord {
    pub year: i32,
    pub aircraft_damage: String,
    pub make: String,
    pub model: String,
    pub total_fatal_injuries: u32,
    pub total_serious_injuries: u32,
    pub total_minor_injuries: u32,
}

/// One fleet aircraft, cleaned.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryRecord {
    pub year: Option<i32>,
    pub make: String,
    pub model: String,
    pub number_of_seats: Option<u32>,
}

const ACCIDENT_COLUMNS: &[&str] = &[
    "year",
    "aircraft_damage",
    "make",
    "model",
    "amateur_built",
    "total_fatal_injuries",
    "total_serious_injuries",
    "total_minor_injuries",
];

const INVENTORY_COLUMNS: &[&str] = &["year", "make", "model", "number_of_seats"];

/// Cleans the accident-source table.
///
/// # Errors
///
/// [`PipelineError::Schema`] when required columns are missing after header
/// normalization, [`PipelineError::Parse`] when an event date cannot be
/// converted to a year.
pub fn clean_accidents(table: &RawTable) -> Result<Vec<AccidentRecord>, PipelineError> {
    let idx = resolve_columns(table, "accidents", ACCIDENT_COLUMNS, |header| {
        let name = header.to_lowercase().replace('.', "_");
        if name == "event_date" {
            "year".to_string()
        } else {
            name
        }
    })?;
    let (year_i, damage_i, make_i, model_i) = (idx[0], idx[1], idx[2], idx[3]);
    let (amateur_i, fatal_i, serious_i, minor_i) = (idx[4], idx[5], idx[6], idx[7]);

    let mut records = Vec::new();
    for row in 0..table.len() {
        // Amateur-built aircraft are out of scope for the fleet join.
        if table.cell(row, amateur_i) != "No" {
            continue;
        }

        let make = normalize_manufacturer_accidents(table.cell(row, make_i));
        let make = if make.contains("boeing") {
            "boeing".to_string()
        } else {
            make
        };

        records.push(AccidentRecord {
            year: parse_event_year(table.cell(row, year_i), row)?,
            aircraft_damage: table.cell(row, damage_i).to_string(),
            make,
            model: extract_model_code(table.cell(row, model_i)),
            total_fatal_injuries: parse_count(table.cell(row, fatal_i)),
            total_serious_injuries: parse_count(table.cell(row, serious_i)),
            total_minor_injuries: parse_count(table.cell(row, minor_i)),
        });
    }

    debug!(raw = table.len(), cleaned = records.len(), "Accident table cleaned");
    Ok(records)
}

/// Cleans the inventory-source table.
///
/// # Errors
///
/// [`PipelineError::Schema`] when required columns are missing after header
/// normalization.
pub fn clean_inventory(table: &RawTable) -> Result<Vec<InventoryRecord>, PipelineError> {
    let idx = resolve_columns(table, "inventory", INVENTORY_COLUMNS, |header| {
        let name = header.to_lowercase();
        if name == "manufacturer" {
            "make".to_string()
        } else {
            name
        }
    })?;
    let (year_i, make_i, model_i, seats_i) = (idx[0], idx[1], idx[2], idx[3]);

    let mut records = Vec::new();
    for row in 0..table.len() {
        let mut make = normalize_manufacturer_inventory(table.cell(row, make_i));
        if make.contains("gulf") {
            make = "gulfstream".to_string();
        }
        let make = make.replace(' ', "/");

        records.push(InventoryRecord {
            year: parse_optional_int(table.cell(row, year_i))
                .and_then(|n| i32::try_from(n).ok()),
            make,
            model: extract_model_code(table.cell(row, model_i)),
            number_of_seats: parse_optional_int(table.cell(row, seats_i))
                .and_then(|n| u32::try_from(n).ok()),
        });
    }

    debug!(raw = table.len(), cleaned = records.len(), "Inventory table cleaned");
    Ok(records)
}

/// Maps each required column name to its index in the table header, after
/// applying `normalize_header` to every header cell.
fn resolve_columns(
    table: &RawTable,
    table_name: &'static str,
    required: &[&str],
    normalize_header: impl Fn(&str) -> String,
) -> Result<Vec<usize>, PipelineError> {
    let normalized: Vec<String> = table.headers().iter().map(|h| normalize_header(h)).collect();

    let mut indices = Vec::with_capacity(required.len());
    let mut missing = Vec::new();
    for name in required {
        match normalized.iter().position(|h| h == name) {
            Some(i) => indices.push(i),
            None => missing.push((*name).to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(PipelineError::Schema {
            table: table_name,
            missing,
        });
    }
    Ok(indices)
}

/// Date layouts tried in order when extracting the event year.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

fn parse_event_year(value: &str, row: usize) -> Result<i32, PipelineError> {
    let value = value.trim();

    // A bare four-digit year is already what we want.
    if let Ok(year) = value.parse::<i32>() {
        if (1000..=9999).contains(&year) {
            return Ok(year);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date.year());
        }
    }
    for format in DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(datetime.year());
        }
    }

    Err(PipelineError::Parse {
        row,
        value: value.to_string(),
    })
}

/// Lenient integer parse for count-like fields: empty or non-numeric cells
/// read as missing, floats are truncated.
fn parse_optional_int(value: &str) -> Option<i64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    match value.parse::<f64>() {
        Ok(f) if f.is_finite() => Some(f as i64),
        _ => None,
    }
}

/// Injury counts: missing or non-numeric cells count as zero, matching the
/// upstream convention where an absent count never raises a category.
fn parse_count(value: &str) -> u32 {
    parse_optional_int(value)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accident_table(body: &str) -> RawTable {
        let header = "Event.Date,Aircraft.Damage,Make,Model,Amateur.Built,\
                      Total.Fatal.Injuries,Total.Serious.Injuries,Total.Minor.Injuries";
        RawTable::from_reader(format!("{header}\n{body}").as_bytes()).unwrap()
    }

    #[test]
    fn test_accidents_headers_are_normalized_and_renamed() {
        let table = accident_table("1999-06-01,Destroyed,Boeing,737-800,No,1,0,0");
        let records = clean_accidents(&table).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 1999);
        assert_eq!(records[0].make, "boeing");
        assert_eq!(records[0].model, "737");
        assert_eq!(records[0].total_fatal_injuries, 1);
    }

    #[test]
    fn test_accidents_missing_columns_are_all_reported() {
        let table = RawTable::from_reader("Make,Model\nCessna,172\n".as_bytes()).unwrap();
        let err = clean_accidents(&table).unwrap_err();

        match err {
            PipelineError::Schema { table, missing } => {
                assert_eq!(table, "accidents");
                assert!(missing.contains(&"year".to_string()));
                assert!(missing.contains(&"amateur_built".to_string()));
                assert!(missing.contains(&"total_fatal_injuries".to_string()));
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_accidents_amateur_built_rows_are_dropped() {
        let table = accident_table(
            "1999-06-01,Minor,Cessna,172,Yes,0,0,0\n2001-02-03,Minor,Cessna,172,No,0,0,1",
        );
        let records = clean_accidents(&table).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].year, 2001);
    }

    #[test]
    fn test_accidents_boeing_variants_collapse() {
        let table = accident_table("1999-06-01,Minor,BOEING COMMERCIAL,747,No,0,0,0");
        let records = clean_accidents(&table).unwrap();
        assert_eq!(records[0].make, "boeing");
    }

    #[test]
    fn test_accidents_bad_date_is_fatal() {
        let table = accident_table("not-a-date,Minor,Cessna,172,No,0,0,0");
        let err = clean_accidents(&table).unwrap_err();
        assert!(matches!(err, PipelineError::Parse { row: 0, .. }));
    }

    #[test]
    fn test_accidents_slash_date_format() {
        let table = accident_table("06/01/1999,Minor,Cessna,172,No,0,0,0");
        assert_eq!(clean_accidents(&table).unwrap()[0].year, 1999);
    }

    #[test]
    fn test_accidents_float_and_empty_counts() {
        let table = accident_table("1999-06-01,Minor,Cessna,172,No,2.0,,x");
        let record = &clean_accidents(&table).unwrap()[0];

        assert_eq!(record.total_fatal_injuries, 2);
        assert_eq!(record.total_serious_injuries, 0);
        assert_eq!(record.total_minor_injuries, 0);
    }

    fn inventory_table(body: &str) -> RawTable {
        let header = "Manufacturer,Model,Number_of_Seats,Year";
        RawTable::from_reader(format!("{header}\n{body}").as_bytes()).unwrap()
    }

    #[test]
    fn test_inventory_basic_row() {
        let table = inventory_table("Boeing Company,737-800,150,2005");
        let records = clean_inventory(&table).unwrap();

        assert_eq!(records[0].make, "boeing");
        assert_eq!(records[0].model, "737");
        assert_eq!(records[0].number_of_seats, Some(150));
        assert_eq!(records[0].year, Some(2005));
    }

    #[test]
    fn test_inventory_gulf_collapses_to_gulfstream() {
        let table = inventory_table("Gulfstream Aerospace,G650,19,2015");
        assert_eq!(clean_inventory(&table).unwrap()[0].make, "gulfstream");
    }

    #[test]
    fn test_inventory_multi_token_make_is_slash_joined() {
        let table = inventory_table("Cirrus Design Of Duluth,SR22,4,2010");
        assert_eq!(
            clean_inventory(&table).unwrap()[0].make,
            "cirrus/design/of/duluth"
        );
    }

    #[test]
    fn test_inventory_alias_with_space_is_slash_joined() {
        let table = inventory_table("MD Helicopters,MD-500,5,2001");
        assert_eq!(clean_inventory(&table).unwrap()[0].make, "mcdonnell/douglas");
    }

    #[test]
    fn test_inventory_invalid_seats_are_missing() {
        let table = inventory_table("Boeing,737,unknown,2005\nBoeing,737,,2006");
        let records = clean_inventory(&table).unwrap();

        assert_eq!(records[0].number_of_seats, None);
        assert_eq!(records[1].number_of_seats, None);
    }

    #[test]
    fn test_inventory_missing_columns() {
        let table = RawTable::from_reader("Manufacturer,Model\nBoeing,737\n".as_bytes()).unwrap();
        let err = clean_inventory(&table).unwrap_err();

        match err {
            PipelineError::Schema { table, missing } => {
                assert_eq!(table, "inventory");
                assert_eq!(missing, vec!["year".to_string(), "number_of_seats".to_string()]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }
}
