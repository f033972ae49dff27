pub mod block;
pub mod clock;
pub mod format;
pub mod models;
pub mod poller;
pub mod settings;
