use std::future::Future;
use std::pin::Pin;

use futures_util::FutureExt;
use tube_transit::{DataFetcher, Result, TransitError};

/// [`DataFetcher`] over plain HTTP(S). No timeout and no retries.
#[derive(Clone, Debug, Default)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn fetch_error(url: &str, error: reqwest::Error) -> TransitError {
    TransitError::Fetch {
        url: url.to_owned(),
        message: error.to_string(),
    }
}

impl DataFetcher for HttpFetcher {
    fn fetch<'a>(
        &'a self,
        url: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<u8>>> + Send + 'a>> {
        async move {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|e| fetch_error(url, e))?;

            let body = response.bytes().await.map_err(|e| fetch_error(url, e))?;
            Ok(body.to_vec())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_host_is_a_fetch_error() {
        let fetcher = HttpFetcher::default();
        // port 9 (discard) is not listening on loopback
        let url = "http://127.0.0.1:9/lines.json";

        match fetcher.fetch(url).await {
            Err(TransitError::Fetch { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected a fetch error, got {other:?}"),
        }
    }
}
