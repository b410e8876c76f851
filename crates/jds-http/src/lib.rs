//! jds-http - Async HTTP helpers for jds-tools
//!
//! Sends batches of GET or POST requests concurrently and returns the
//! responses in input order.

pub mod error;
pub mod requests;

pub use error::{HttpError, HttpResult};
pub use requests::{
    fetch_all, fetch_all_with, post_all, post_all_with, Headers, HttpResponse, Payload,
};
