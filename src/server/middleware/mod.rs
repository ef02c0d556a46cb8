//! HTTP middleware implementations
//!
//! - Subject extraction from the upstream-auth role header
//! - Per-scope authorization guards
//! - Request ID tracking

mod authorize;
mod request_id;
mod subject;

#[cfg(test)]
mod tests;

pub use authorize::{Authorize, AuthorizeService};
pub use request_id::{RequestId, RequestIdService};
pub use subject::{SubjectExtractor, SubjectExtractorService};
