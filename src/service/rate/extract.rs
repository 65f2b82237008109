//! Pulls rate records out of the HKAB exchange rate page.
//!
//! The page has no stable ids or captions on its rate tables, so the tables
//! are addressed by position among the `table .etxtmed` elements. If HKAB
//! changes the layout this yields wrong or empty data rather than an error.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::service::rate::CurrencyRate;

pub const RATE_TABLE_SELECTOR: &str = "table .etxtmed";
/// HKD per 100 units of foreign currency.
pub const UNIT_100_TABLE_INDEX: usize = 8;
/// HKD per 1 unit of foreign currency.
pub const UNIT_1_TABLE_INDEX: usize = 9;
/// Title, legend and column header rows preceding the data in each table.
pub const SKIPPED_ROWS: usize = 3;

static TABLES: LazyLock<Selector> = LazyLock::new(|| selector(RATE_TABLE_SELECTOR));
static ROWS: LazyLock<Selector> = LazyLock::new(|| selector("tbody tr"));
static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("unable to compile number regex")
});

fn selector(s: &str) -> Selector {
    Selector::parse(s).expect("unable to create selector")
}

/// Parses both rate tables and keeps only records for `to_currency` (exact match).
pub fn extract(html: &str, to_currency: &str) -> Vec<CurrencyRate> {
    parse_rates(html)
        .into_iter()
        .filter(|r| r.currency_code == to_currency)
        .collect()
}

/// All records of the page: the 100-unit table normalized to one unit, then the 1-unit table.
pub fn parse_rates(html: &str) -> Vec<CurrencyRate> {
    let doc = Html::parse_document(html);
    let tables: Vec<ElementRef> = doc.select(&TABLES).collect();

    let mut rates: Vec<CurrencyRate> = match tables.get(UNIT_100_TABLE_INDEX) {
        Some(table) => parse_table(*table)
            .into_iter()
            .map(|r| r.per_unit(100.0))
            .collect(),
        None => {
            warn!("100 units rate table not found, tables on page={}", tables.len());
            vec![]
        }
    };

    match tables.get(UNIT_1_TABLE_INDEX) {
        Some(table) => rates.extend(parse_table(*table)),
        None => warn!("1 unit rate table not found, tables on page={}", tables.len()),
    }

    rates
}

fn parse_table(table: ElementRef) -> Vec<CurrencyRate> {
    // one pass, so rows of nested tables are visited once in document order
    table.select(&ROWS)
        .skip(SKIPPED_ROWS)
        .map(parse_row)
        .collect()
}

fn parse_row(row: ElementRef) -> CurrencyRate {
    let cells: Vec<String> = row.select(&TD)
        .take(5)
        .map(|td| td.text().collect::<String>().trim().to_string())
        .collect();

    let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or_default();

    CurrencyRate::new(
        cell(0).to_string(),
        cell(1).to_string(),
        parse_number(cell(2)),
        parse_number(cell(3)),
        parse_number(cell(4)),
    )
}

/// Reads the leading decimal number (or `Infinity`) of `s`, ignoring anything after it.
/// NaN when there is none.
pub fn parse_number(s: &str) -> f64 {
    LEADING_NUMBER.find(s.trim_start())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(f64::NAN)
}
