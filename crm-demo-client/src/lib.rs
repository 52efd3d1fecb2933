pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod form;

pub use client::DemoClient;
pub use config::ClientConfig;
pub use display::{render, DisplayKind, MemorySink, OutputSink, ResultDisplay, TerminalSink};
pub use error::ClientError;
pub use form::{AuthToken, ContactForm};
