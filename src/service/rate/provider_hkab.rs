use std::time::Duration;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::service::rate::request::RequestDescriptor;
use crate::service::rate::{extract, request, CurrencyRate, DateSpec, RateProvider};

pub const ENDPOINT: &str = "https://www.hkab.org.hk/ExchangeRateDisplayAction.do";

#[derive(Clone, Debug)]
pub struct Provider {
    client: reqwest::Client,
    endpoint: String,
}

impl Provider {
    pub fn new(cfg: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: cfg.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, req: RequestDescriptor) -> Result<String> {
        let mut builder = self.client.request(req.method().clone(), req.endpoint());

        for (name, value) in req.headers() {
            builder = builder.header(*name, *value);
        }
        if let Some(form) = req.form() {
            builder = builder.form(form);
        }

        let html = builder
            .send().await?
            .error_for_status()?
            .text().await?;

        Ok(html)
    }
}

impl Default for Provider {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: ENDPOINT.into(),
        }
    }
}

impl RateProvider for Provider {
    async fn get_rates(&self, to_currency: &str, date: Option<&DateSpec>) -> Result<Vec<CurrencyRate>> {
        let req = request::build(date)?.with_endpoint(&self.endpoint);

        debug!("requesting rates from endpoint={} date={:?}", req.endpoint(), date);
        let html = self.send(req).await?;

        let rates = extract::extract(&html, to_currency);
        info!("got {} rate(s) for currency={}", rates.len(), to_currency);

        Ok(rates)
    }
}
