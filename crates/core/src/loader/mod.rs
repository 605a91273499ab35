//! One-shot dataset slots backed by either injected data or a fixed URL.
//!
//! A slot re-runs only when the identity of its input changes: passing a
//! fresh `Arc` with identical contents triggers a reload, passing the same
//! `Arc` (or `None` again) does not. Callers that want to avoid reloads keep
//! their `Arc`s stable.

mod http;

use std::sync::Arc;

use tracing::{error, info};
use tube_transit::{DataFetcher, Dataset, Result};

pub use http::HttpFetcher;

pub struct DataLoader<T: Dataset> {
    url: String,
    /// `None` until the first resolve completes; then the input it ran for.
    last_input: Option<Option<Arc<T>>>,
    data: Option<Arc<T>>,
}

impl<T: Dataset> DataLoader<T> {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            last_input: None,
            data: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn data(&self) -> Option<&Arc<T>> {
        self.data.as_ref()
    }

    pub fn needs_refresh(&self, input: Option<&Arc<T>>) -> bool {
        match &self.last_input {
            None => true,
            Some(None) => input.is_some(),
            Some(Some(previous)) => !input.is_some_and(|input| Arc::ptr_eq(previous, input)),
        }
    }

    /// Bring the slot up to date with `input`.
    ///
    /// Injected data is adopted as-is. With no input the slot's URL is
    /// fetched once; a failure is logged and leaves the slot empty. Dropping
    /// the returned future before it completes leaves the slot untouched.
    pub async fn resolve(
        &mut self,
        input: Option<Arc<T>>,
        fetcher: &dyn DataFetcher,
    ) -> Option<Arc<T>> {
        if !self.needs_refresh(input.as_ref()) {
            return self.data.clone();
        }

        let data = match &input {
            Some(injected) => Some(Arc::clone(injected)),
            None => self.fetch(fetcher).await,
        };

        self.last_input = Some(input);
        self.data = data;
        self.data.clone()
    }

    async fn fetch(&self, fetcher: &dyn DataFetcher) -> Option<Arc<T>> {
        match self.fetch_and_decode(fetcher).await {
            Ok(data) => {
                info!(
                    kind = T::KIND,
                    url = %self.url,
                    features = data.feature_count(),
                    "loaded dataset"
                );
                Some(Arc::new(data))
            }
            Err(e) => {
                error!(kind = T::KIND, url = %self.url, error = %e, "failed to load dataset");
                None
            }
        }
    }

    async fn fetch_and_decode(&self, fetcher: &dyn DataFetcher) -> Result<T> {
        let bytes = fetcher.fetch(&self.url).await?;
        T::decode(&bytes)
    }
}
