pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod responses;

pub use client::{ApiClient, paths};
pub use error::{ClientError, Result as ClientResult};
pub use responses::{MutationReceipt, PhotoFile, ProbeOutcome};
