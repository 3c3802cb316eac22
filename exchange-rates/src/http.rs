//! HTTP rate source for Frankfurter-compatible APIs.
//!
//! Issues `GET {base_url}/latest?from=USD&to=EUR` and reads the rate from a
//! body shaped like:
//!
//! ```json
//! {"amount": 1.0, "base": "USD", "date": "2024-01-02", "rates": {"EUR": 0.91}}
//! ```
//!
//! Every call goes to the network. There is no caching and no retry.

use std::collections::HashMap;
use std::time::Duration;

use currency_types::{RateError, RateSource};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;

/// Public Frankfurter instance.
pub const DEFAULT_API_URL: &str = "https://api.frankfurter.app";

/// Fields of the `/latest` response that matter for a single rate.
#[derive(Debug, Deserialize)]
struct LatestRates {
    amount: f64,
    rates: HashMap<String, f64>,
}

/// Rate source backed by a remote JSON API.
pub struct HttpRateSource {
    base_url: String,
    http: Client,
}

impl HttpRateSource {
    /// Creates a client for `base_url` with a per-request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RateError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RateError::ServiceUnavailable(format!("HTTP client setup: {e}")))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Returns the API base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn latest_url(&self) -> String {
        format!("{}/latest", self.base_url)
    }
}

impl RateSource for HttpRateSource {
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        if from.eq_ignore_ascii_case(to) {
            return Ok(1.0);
        }

        tracing::debug!(from, to, url = %self.latest_url(), "requesting rate");

        let resp = self
            .http
            .get(self.latest_url())
            .query(&[("from", from), ("to", to)])
            .send()
            .map_err(|e| {
                tracing::warn!(from, to, error = %e, "rate request failed");
                RateError::ServiceUnavailable(e.to_string())
            })?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::UNPROCESSABLE_ENTITY {
            tracing::warn!(from, to, %status, "rate service rejected currency pair");
            return Err(RateError::UnsupportedCurrency(format!("{from}/{to}")));
        }
        if !status.is_success() {
            tracing::warn!(from, to, %status, "rate service error");
            return Err(RateError::ServiceUnavailable(format!("HTTP {status}")));
        }

        let body = resp
            .text()
            .map_err(|e| RateError::ServiceUnavailable(e.to_string()))?;
        parse_rate(&body, from, to)
    }
}

/// Extracts the `from -> to` rate from a `/latest` response body.
fn parse_rate(body: &str, from: &str, to: &str) -> Result<f64, RateError> {
    let latest: LatestRates =
        serde_json::from_str(body).map_err(|e| RateError::InvalidResponse(e.to_string()))?;

    let quoted = latest
        .rates
        .get(&to.to_uppercase())
        .copied()
        .ok_or_else(|| RateError::not_available(from, to))?;

    // Rates are quoted for `amount` units of the base currency
    Ok(quoted / latest.amount)
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use super::*;

    const BODY: &str =
        r#"{"amount":1.0,"base":"USD","date":"2024-01-02","rates":{"EUR":0.91}}"#;

    fn source(url: &str) -> HttpRateSource {
        HttpRateSource::new(url, Duration::from_secs(2)).unwrap()
    }

    /// Serves one canned response on a local port.
    ///
    /// Returns the base URL and a handle yielding the request head.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            concat!(
                "HTTP/1.1 {}\r\n",
                "Content-Type: application/json\r\n",
                "Content-Length: {}\r\n",
                "Connection: close\r\n\r\n{}",
            ),
            status,
            body.len(),
            body
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut head: Vec<u8> = Vec::new();
            let mut buf = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&head).into_owned()
        });

        (url, handle)
    }

    #[test]
    fn test_get_rate_ok() {
        let (url, server) = serve_once("200 OK", BODY);

        let rate = source(&url).get_rate("USD", "EUR").unwrap();

        assert_eq!(rate, 0.91);
        let head = server.join().unwrap();
        assert!(head.starts_with("GET /latest?from=USD&to=EUR "), "{head}");
    }

    #[test]
    fn test_get_rate_ok_without_target_in_body() {
        let (url, server) = serve_once("200 OK", BODY);

        let result = source(&url).get_rate("USD", "GBP");

        assert_eq!(result, Err(RateError::not_available("USD", "GBP")));
        server.join().unwrap();
    }

    #[test]
    fn test_get_rate_not_found_is_unsupported() {
        let (url, server) = serve_once("404 Not Found", r#"{"message":"not found"}"#);

        let result = source(&url).get_rate("USD", "XYZ");

        assert_eq!(result, Err(RateError::UnsupportedCurrency("USD/XYZ".into())));
        server.join().unwrap();
    }

    #[test]
    fn test_get_rate_unprocessable_is_unsupported() {
        let (url, server) = serve_once("422 Unprocessable Entity", r#"{"message":"bad"}"#);

        let result = source(&url).get_rate("ABC", "EUR");

        assert_eq!(result, Err(RateError::UnsupportedCurrency("ABC/EUR".into())));
        server.join().unwrap();
    }

    #[test]
    fn test_get_rate_server_error_is_unavailable() {
        let (url, server) = serve_once("503 Service Unavailable", "{}");

        let result = source(&url).get_rate("USD", "EUR");

        assert!(
            matches!(&result, Err(RateError::ServiceUnavailable(msg)) if msg.contains("503")),
            "{result:?}"
        );
        server.join().unwrap();
    }

    #[test]
    fn test_get_rate_garbage_body_is_invalid() {
        let (url, server) = serve_once("200 OK", "not json");

        let result = source(&url).get_rate("USD", "EUR");

        assert!(matches!(result, Err(RateError::InvalidResponse(_))));
        server.join().unwrap();
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate(BODY, "USD", "EUR").unwrap(), 0.91);
        assert_eq!(parse_rate(BODY, "usd", "eur").unwrap(), 0.91);
    }

    #[test]
    fn test_parse_rate_scales_by_amount() {
        let body = r#"{"amount":10.0,"base":"GBP","date":"2024-01-02","rates":{"EUR":11.6}}"#;
        let rate = parse_rate(body, "GBP", "EUR").unwrap();
        assert!((rate - 1.16).abs() < 1e-12);
    }

    #[test]
    fn test_parse_rate_missing_target() {
        assert_eq!(
            parse_rate(BODY, "USD", "GBP"),
            Err(RateError::not_available("USD", "GBP"))
        );
    }

    #[test]
    fn test_parse_rate_bad_body() {
        assert!(matches!(
            parse_rate("<html>oops</html>", "USD", "EUR"),
            Err(RateError::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_rate(r#"{"rates":{}}"#, "USD", "EUR"),
            Err(RateError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let rates = source("http://localhost:8080/");
        assert_eq!(rates.base_url(), "http://localhost:8080");
        assert_eq!(rates.latest_url(), "http://localhost:8080/latest");
    }

    #[test]
    fn test_same_currency_needs_no_request() {
        // Nothing listens here; a request would fail
        let rates = source("http://127.0.0.1:9");
        assert_eq!(rates.get_rate("EUR", "eur").unwrap(), 1.0);
    }

    #[test]
    fn test_unreachable_service() {
        let rates = source("http://127.0.0.1:9");
        assert!(matches!(
            rates.get_rate("USD", "EUR"),
            Err(RateError::ServiceUnavailable(_))
        ));
    }
}
