use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};

/// One row of an HKAB rate table, priced in HKD per single unit of foreign currency.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyRate {
    pub currency_code: String,
    pub currency: String,
    pub selling: f64,
    #[serde(rename = "buyingTT")]
    pub buying_tt: f64,
    #[serde(rename = "buyingDD")]
    pub buying_dd: f64,
}

impl CurrencyRate {
    pub fn new(
        currency_code: String,
        currency: String,
        selling: f64,
        buying_tt: f64,
        buying_dd: f64,
    ) -> Self {
        Self { currency_code, currency, selling, buying_tt, buying_dd }
    }

    pub(crate) fn per_unit(self, unit: f64) -> Self {
        Self {
            selling: self.selling / unit,
            buying_tt: self.buying_tt / unit,
            buying_dd: self.buying_dd / unit,
            ..self
        }
    }
}

/// Historical rate date as typed by the caller. Parts are sent to the site verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpec {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateSpec {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }
}

impl FromStr for DateSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.split('-').collect::<Vec<_>>().as_slice() {
            [day, month, year] => Ok(DateSpec::new(*day, *month, *year)),
            _ => Err(Error::invalid_date()),
        }
    }
}

pub trait RateProvider {
    async fn get_rates(&self, to_currency: &str, date: Option<&DateSpec>) -> Result<Vec<CurrencyRate>>;
}
