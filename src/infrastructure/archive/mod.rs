//! Archive client implementations.

mod tap_client;

pub use tap_client::{ArchiveSettings, TapArchiveClient};
