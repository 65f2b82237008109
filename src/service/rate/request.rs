use chrono::NaiveDate;
use reqwest::Method;

use crate::error::{Error, Result};
use crate::service::rate::{hkab, DateSpec};

const DATE_FORMAT: &str = "%d-%m-%Y";

const CONTENT_TYPE: (&str, &str) = ("content-type", "application/x-www-form-urlencoded");
// the site rejects requests without a browser-like agent
const USER_AGENT: (&str, &str) = ("user-agent", "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_13_6) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/72.0.3626.121 Safari/537.36");

pub mod form {
    pub const DAY: &str = "rateDay";
    pub const MONTH: &str = "rateMonth";
    pub const YEAR: &str = "rateYear";
}

/// A ready-to-send rate query. Built once per query and consumed by the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    endpoint: String,
    method: Method,
    headers: Vec<(&'static str, &'static str)>,
    form: Option<Vec<(&'static str, String)>>,
}

impl RequestDescriptor {
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &[(&'static str, &'static str)] {
        &self.headers
    }

    /// Date-selecting form fields, `None` when the latest rates are requested.
    pub fn form(&self) -> Option<&[(&'static str, String)]> {
        self.form.as_deref()
    }

    pub fn with_endpoint(self, endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            ..self
        }
    }
}

/// Builds the rate query for `date`, or for the latest published rates when `None`.
///
/// The page always lists every currency, so the requested currency code is not part
/// of the request; it is applied afterwards by [`extract::extract`](super::extract::extract).
pub fn build(date: Option<&DateSpec>) -> Result<RequestDescriptor> {
    let form = match date {
        Some(date) => {
            validate_date(date)?;
            Some(vec![
                (form::DAY, date.day.clone()),
                (form::MONTH, date.month.clone()),
                (form::YEAR, date.year.clone()),
            ])
        }
        None => None,
    };

    Ok(RequestDescriptor {
        endpoint: hkab::ENDPOINT.into(),
        method: Method::POST,
        headers: vec![CONTENT_TYPE, USER_AGENT],
        form,
    })
}

pub fn validate_date(date: &DateSpec) -> Result<NaiveDate> {
    let s = format!("{}-{}-{}", date.day, date.month, date.year);

    NaiveDate::parse_from_str(&s, DATE_FORMAT)
        .map_err(|_| Error::invalid_date())
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_invalid(date: DateSpec) {
        match build(Some(&date)) {
            Err(Error::Validation(msg)) => assert_eq!(msg, "Date is invalid"),
            other => panic!("expected validation error for {date:?}, got {other:?}"),
        }
    }

    #[test]
    fn latest_rates_carry_no_form() {
        let req = build(None).unwrap();

        assert_eq!(req.endpoint(), "https://www.hkab.org.hk/ExchangeRateDisplayAction.do");
        assert_eq!(req.method(), &Method::POST);
        assert!(req.form().is_none());
    }

    #[test]
    fn fixed_headers() {
        let req = build(None).unwrap();
        let headers = req.headers();

        assert!(headers.contains(&("content-type", "application/x-www-form-urlencoded")));
        assert!(headers.iter().any(|(k, v)| *k == "user-agent" && v.starts_with("Mozilla/5.0")));
    }

    #[test]
    fn valid_date_sets_three_fields_verbatim() {
        let req = build(Some(&DateSpec::new("14", "03", "2019"))).unwrap();

        assert_eq!(req.form().unwrap(), &[
            ("rateDay", "14".to_string()),
            ("rateMonth", "03".to_string()),
            ("rateYear", "2019".to_string()),
        ]);
    }

    #[test]
    fn leap_day_is_valid() {
        let req = build(Some(&DateSpec::new("29", "02", "2020"))).unwrap();
        assert_eq!(req.form().unwrap().len(), 3);
    }

    #[test]
    fn invalid_dates_are_rejected() {
        assert_invalid(DateSpec::new("32", "01", "2019"));
        assert_invalid(DateSpec::new("14", "13", "2019"));
        assert_invalid(DateSpec::new("ab", "03", "2019"));
        assert_invalid(DateSpec::new("29", "02", "2019"));
        assert_invalid(DateSpec::new("14", "03", ""));
        assert_invalid(DateSpec::new("2019", "03", "14"));
    }

    #[test]
    fn validate_returns_parsed_date() {
        let date = validate_date(&DateSpec::new("13", "03", "2019")).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2019, 3, 13).unwrap());
    }

    #[test]
    fn with_endpoint_keeps_form() {
        let req = build(Some(&DateSpec::new("01", "02", "2021")))
            .unwrap()
            .with_endpoint("http://127.0.0.1:1/rates");

        assert_eq!(req.endpoint(), "http://127.0.0.1:1/rates");
        assert_eq!(req.form().unwrap()[0], ("rateDay", "01".to_string()));
    }
}
