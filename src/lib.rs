pub mod core;
pub mod providers;

pub use crate::core::format::format_duration;
pub use crate::core::models::{DisplayPayload, PollConfig, ProductivityDataset, ProductivityRow};
pub use crate::core::poller::{aggregate, poll, NO_DATA_TEXT};
