//! Series preparation and multi-channel handling

pub mod missing;
pub mod channels;

pub use missing::{check_complete, is_missing, resolve_missing, GapPolicy, EPIC_FILL_VALUE};
pub use channels::ChannelSet;
