//! Network operations for downloading the route server datasets.
//!
//! This module fetches the PeeringDB list of networks registered as route
//! servers and the Euro-IX IXP service matrix. Both are plain HTTP GET
//! requests; bodies are handed back as lines of text.

use crate::error::{CollectorError, Result};
use futures_lite::future;
use std::{thread, time::Duration};

/// PeeringDB networks whose `info_type` is "Route Server" (JSON)
pub const PEERINGDB_URL: &str = "https://www.peeringdb.com/api/net?info_type=Route%20Server";

/// Euro-IX IXP service matrix (comma separated, one IXP per line)
pub const EUROIX_URL: &str = "https://www.euro-ix.net/csv/ixp-service-matrix";

pub const USER_AGENT: &str = "Mozilla/5.0";

const MAX_BODY_BYTES: u64 = 64 * 1024 * 1024;

/// How many times a failed download is repeated before giving up.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub retries: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            retries: 0,
            delay: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Runs `op` once, then up to `retries` more times while it keeps failing.
    /// The error of the last attempt is returned.
    pub fn run<T>(&self, what: &str, mut op: impl FnMut() -> Result<T>) -> Result<T> {
        let mut attempt = 0;
        loop {
            match op() {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    log::warn!(
                        "Attempt {} of {} for {} failed: {}",
                        attempt,
                        self.retries + 1,
                        what,
                        e
                    );
                    thread::sleep(self.delay);
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Bodies of both datasets, one entry per line.
#[derive(Debug)]
pub struct SourceBodies {
    pub peeringdb: Vec<String>,
    pub euroix: Vec<String>,
}

/// Issues a GET request and returns the response body split into lines.
///
/// The request carries `User-Agent: Mozilla/5.0`; some of the upstream
/// servers refuse the default agent of HTTP libraries.
///
/// # Errors
/// - [`CollectorError::Status`] if the server answers with a non-success status
/// - [`CollectorError::Network`] if the connection fails or the body can't be read
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the download.
pub fn fetch_lines(url: &str) -> Result<Vec<String>> {
    log::info!("Downloading '{}'", url);
    let mut response = ureq::get(url)
        .header("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| CollectorError::network(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CollectorError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .body_mut()
        .with_config()
        .limit(MAX_BODY_BYTES)
        .read_to_vec()
        .map_err(|e| CollectorError::network(url, e))?;

    // Upstream files are not guaranteed to be UTF-8, only the ASN columns are ASCII.
    Ok(String::from_utf8_lossy(&body)
        .lines()
        .map(String::from)
        .collect())
}

/// Downloads a URL honouring the retry policy.
pub fn fetch_lines_with_retry(url: &str, policy: &RetryPolicy) -> Result<Vec<String>> {
    policy.run(url, || fetch_lines(url))
}

/// Downloads both datasets concurrently on the blocking thread pool.
///
/// Parsing only starts once both downloads completed; the first error is
/// reported if either fails.
pub fn fetch_sources(peeringdb_url: &str, euroix_url: &str, policy: &RetryPolicy) -> Result<SourceBodies> {
    let policy = *policy;
    let peeringdb_url = peeringdb_url.to_string();
    let euroix_url = euroix_url.to_string();

    let (peeringdb, euroix) = smol::block_on(future::zip(
        smol::unblock(move || fetch_lines_with_retry(&peeringdb_url, &policy)),
        smol::unblock(move || fetch_lines_with_retry(&euroix_url, &policy)),
    ));

    Ok(SourceBodies {
        peeringdb: peeringdb?,
        euroix: euroix?,
    })
}
