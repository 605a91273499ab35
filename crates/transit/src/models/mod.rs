mod feature;
pub mod line;
pub mod station;
pub mod trip;
pub mod types;

use crate::models::types::Result;

/// A dataset that can be decoded from a fetched response body.
pub trait Dataset: Sized + Send + Sync + 'static {
    /// Human-readable name used in log lines.
    const KIND: &'static str;

    fn decode(bytes: &[u8]) -> Result<Self>;

    fn feature_count(&self) -> usize;
}
