pub mod client;
pub mod endpoints;
pub mod models;

pub use client::EmailClient;
pub use models::{AttachmentInfo, Email, RawEmailRecord, RetrievalParams};
