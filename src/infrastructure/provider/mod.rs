//! Remote holiday data sources.

mod nager;

pub use nager::NagerClient;
