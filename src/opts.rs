//! CLI options.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand as ClapSubcommand};

use crate::prelude::*;

pub mod parsers;

#[derive(Parser)]
#[command(author, version, about, long_about = None, propagate_version = true)]
pub struct Opts {
    /// Sentry DSN
    #[arg(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Sentry performance monitoring sample rate
    #[arg(
        long,
        env = "TRACES_SAMPLE_RATE",
        default_value = "0",
        value_parser = parsers::sample_rate,
    )]
    pub traces_sample_rate: f32,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(ClapSubcommand)]
pub enum Subcommand {
    Web(WebOpts),
    Fit(FitOpts),
}

/// Runs the web API
#[derive(Args)]
pub struct WebOpts {
    /// Web application bind host
    #[arg(long, env = "ANALYSER_HOST", default_value = "::")]
    pub host: String,

    /// Web application bind port
    #[arg(short, long, env = "ANALYSER_PORT", default_value = "8080")]
    pub port: u16,

    /// How long to wait for in-flight requests on shutdown
    #[arg(
        long,
        env = "ANALYSER_SHUTDOWN_TIMEOUT",
        default_value = "5s",
        value_parser = humantime::parse_duration,
    )]
    pub shutdown_timeout: StdDuration,
}

/// Fits a line to the samples from a JSON document and prints the coefficients
#[derive(Args)]
pub struct FitOpts {
    /// Input JSON file with `x` and `y` arrays, reads the standard input if omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Also predict `y` at this `x`, may be repeated
    #[arg(long, allow_negative_numbers = true, value_parser = parsers::finite_f64)]
    pub predict: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_command_ok() {
        Opts::command().debug_assert();
    }

    #[test]
    fn parse_web_ok() -> Result {
        let opts = Opts::try_parse_from(["analyser", "web", "--port", "8081", "--shutdown-timeout", "1m"])?;
        match opts.subcommand {
            Subcommand::Web(web) => {
                assert_eq!(web.host, "::");
                assert_eq!(web.port, 8081);
                assert_eq!(web.shutdown_timeout, StdDuration::from_secs(60));
            }
            Subcommand::Fit(_) => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn parse_fit_ok() -> Result {
        let opts = Opts::try_parse_from(["analyser", "fit", "--predict", "1.5", "--predict", "-2"])?;
        match opts.subcommand {
            Subcommand::Fit(fit) => {
                assert!(fit.input.is_none());
                assert_eq!(fit.predict, [1.5, -2.0]);
            }
            Subcommand::Web(_) => unreachable!(),
        }
        Ok(())
    }

    #[test]
    fn invalid_sample_rate_error() {
        let result = Opts::try_parse_from(["analyser", "--traces-sample-rate", "1.5", "web"]);
        assert!(result.is_err());
    }
}
