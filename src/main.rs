//! rfq-math - command line front end
//!
//! Converts between milli-satoshi and asset units at a given price and
//! prints the limits of an asset's decimal display.
//!
//! ```bash
//! rfq-math to-units --price 50702.12 --decimal-display 6 1973
//! rfq-math to-msat --price 50702.12 --decimal-display 6 1000
//! rfq-math limits --price 50702.12 --shards 16
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use rfq_math::{
    milli_sat_to_units_fixed, units_to_milli_sat, DecimalDisplayLimits, FixedPoint, MilliSatoshi,
};

#[derive(Parser)]
#[clap(version, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Converts a milli-satoshi payment into asset units
    ToUnits {
        /// Asset price per BTC, e.g. 50702.12
        #[clap(short, long)]
        price: FixedPoint,
        /// Decimal display of the asset
        #[clap(short, long, env = "RFQ_DECIMAL_DISPLAY")]
        decimal_display: i32,
        msat: u64,
    },
    /// Converts asset units into a milli-satoshi payment
    ToMsat {
        /// Asset price per BTC, e.g. 50702.12
        #[clap(short, long)]
        price: FixedPoint,
        /// Decimal display of the asset
        #[clap(short, long, env = "RFQ_DECIMAL_DISPLAY")]
        decimal_display: i32,
        units: u64,
    },
    /// Prints the limits of one or more decimal displays at a price
    Limits {
        /// Asset price per BTC, e.g. 50702.12
        #[clap(short, long)]
        price: FixedPoint,
        /// Only report this decimal display
        #[clap(short, long, env = "RFQ_DECIMAL_DISPLAY")]
        decimal_display: Option<i32>,
        /// Highest decimal display reported when none is given
        #[clap(long, default_value_t = 8)]
        max_decimal_display: i32,
        /// Number of shards a payment is split into
        #[clap(short, long, env = "RFQ_MPP_SHARDS", default_value_t = 16)]
        shards: u64,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::ToUnits {
            price,
            decimal_display,
            msat,
        } => {
            let price = at_display(price, decimal_display)?;
            let units = milli_sat_to_units_fixed(MilliSatoshi(msat), price)
                .context("converting payment to asset units")?;
            println!("{} ({})", units.value(), trimmed(&units));
        }
        Command::ToMsat {
            price,
            decimal_display,
            units,
        } => {
            let price = at_display(price, decimal_display)?;
            let asset = FixedPoint::from_integer(units, price.scale())?;
            let msat = units_to_milli_sat(asset, price)
                .context("converting asset units to payment")?;
            println!("{}", msat.0);
        }
        Command::Limits {
            price,
            decimal_display,
            max_decimal_display,
            shards,
        } => {
            let displays = match decimal_display {
                Some(display) => display..=display,
                None => 2..=max_decimal_display,
            };
            println!("-------------\nPrice: {price} units/BTC\n-------------");
            for limits in DecimalDisplayLimits::for_displays(price, displays, shards)? {
                println!("{limits}\n");
            }
        }
    }

    Ok(())
}

fn at_display(price: FixedPoint, decimal_display: i32) -> anyhow::Result<FixedPoint> {
    price
        .scale_to(decimal_display)
        .with_context(|| format!("rescaling price {price} to decimal display {decimal_display}"))
}

/// Asset amount without trailing zeros, e.g. `0.01` rather than `0.010000`.
fn trimmed(amount: &FixedPoint) -> String {
    amount
        .to_decimal()
        .map(|decimal| decimal.normalize().to_string())
        .unwrap_or_else(|_| amount.to_string())
}
