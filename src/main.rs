use clap::Parser;
use tracing::{error, info};

use hkab_rate::{Config, DateSpec, Provider, RateProvider};

#[derive(Parser, Debug)]
#[command(name = "hkab-rate", version, about = "Look up HKAB exchange rates for a currency")]
struct Args {
    /// Currency code as listed by HKAB, e.g. JPY
    currency: String,

    /// Rate date as DD-MM-YYYY, latest published rates when omitted
    #[arg(long)]
    date: Option<DateSpec>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = Config::from_env().expect("unable to parse env variables");
    let provider = Provider::new(&cfg).expect("unable to create http client");

    info!("querying currency={} date={:?}...", args.currency, args.date);

    let rates = match provider.get_rates(&args.currency, args.date.as_ref()).await {
        Ok(rates) => rates,
        Err(err) => {
            error!("unable to get rates for currency={}: {err}", args.currency);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&rates) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            error!("unable to print rates: {err}");
            std::process::exit(1);
        }
    }
}
