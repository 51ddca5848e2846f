//! Asset expansion and publishing.

mod expander;
mod publisher;

pub use expander::{Asset, TAG_PLACEHOLDER, expand_assets};
pub use publisher::{AssetOutcome, UploadReport, publish_asset, publish_assets};
