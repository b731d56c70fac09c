//! Command-line interface module.
//!
//! Every option has a default, so running the binary without arguments
//! performs the complete collection into the current directory.

use crate::network::{EUROIX_URL, PEERINGDB_URL, RetryPolicy};
use crate::parser::JsonPolicy;
use clap::Parser;
use std::{path::PathBuf, time::Duration};

/// Collects the ASNs of IXP route servers from PeeringDB and Euro-IX
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory in which RouteServerASNs_<YYYYMMDD>.txt is written
    #[arg(short = 'o', long = "output-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// PeeringDB endpoint listing route server networks
    #[arg(long = "peeringdb-url", default_value = PEERINGDB_URL)]
    pub peeringdb_url: String,

    /// Euro-IX IXP service matrix endpoint
    #[arg(long = "euroix-url", default_value = EUROIX_URL)]
    pub euroix_url: String,

    /// How many times a failed download is retried
    #[arg(short = 'r', long = "retries", default_value = "0")]
    pub retries: u32,

    /// Seconds to wait between download attempts
    #[arg(long = "retry-delay", default_value = "2")]
    pub retry_delay: u64,

    /// Abort when the PeeringDB response is not valid JSON instead of skipping it
    #[arg(long = "strict-json")]
    pub strict_json: bool,
}

impl Args {
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            retries: self.retries,
            delay: Duration::from_secs(self.retry_delay),
        }
    }

    pub fn json_policy(&self) -> JsonPolicy {
        if self.strict_json {
            JsonPolicy::Strict
        } else {
            JsonPolicy::Lenient
        }
    }
}
