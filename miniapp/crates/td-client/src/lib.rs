//! td-client library
//!
//! Typed REST client for the dating API. Session credentials are cookies set
//! by the server, so one `ApiClient` must be reused for a whole session.

pub(crate) mod client;


pub use client::{
    ApiClient, ClientError, ClientResult, MutationReceipt, PhotoFile, ProbeOutcome, paths,
};
