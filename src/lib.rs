//! Foreign exchange rates published by the Hong Kong Association of Banks.
//!
//! ```no_run
//! use hkab_rate::{query_currency, DateSpec};
//!
//! # async fn run() -> hkab_rate::Result<()> {
//! let date = DateSpec::new("14", "03", "2019");
//! let rates = query_currency("JPY", Some(&date)).await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
pub mod service;

pub use config::Config;
pub use error::{Error, Result};
pub use service::rate::hkab::Provider;
pub use service::rate::{CurrencyRate, DateSpec, RateProvider};

/// Queries HKAB once and returns the records for `to_currency`.
///
/// Without a date the site's latest published rates are used.
pub async fn query_currency(to_currency: &str, date: Option<&DateSpec>) -> Result<Vec<CurrencyRate>> {
    Provider::default().get_rates(to_currency, date).await
}

/// Same as [`query_currency`], handing the outcome to `callback` instead of returning it.
pub async fn query_currency_with<F>(to_currency: &str, date: Option<&DateSpec>, callback: F)
where
    F: FnOnce(Result<Vec<CurrencyRate>>),
{
    query_with(&Provider::default(), to_currency, date, callback).await
}

/// Callback-style query against any [`RateProvider`].
pub async fn query_with<P, F>(provider: &P, to_currency: &str, date: Option<&DateSpec>, callback: F)
where
    P: RateProvider,
    F: FnOnce(Result<Vec<CurrencyRate>>),
{
    callback(provider.get_rates(to_currency, date).await)
}
