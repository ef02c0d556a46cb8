//! Per-request access subject

use actix_web::http::header::HeaderMap;

use super::rbac::Role;

/// The resolved caller of a single in-flight request.
///
/// Produced at the HTTP boundary from the role resolved by the
/// upstream authentication collaborator, threaded through request
/// extensions, and dropped with the request. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessSubject {
    /// The caller's role
    pub role: Role,
}

impl AccessSubject {
    /// Create a subject for a role
    pub fn new(role: Role) -> Self {
        Self { role }
    }

    /// Resolve a subject from the trusted role header.
    ///
    /// The header value arrives as an untyped string at the trust
    /// boundary; anything that does not parse to a known role yields
    /// no subject, which downstream authorization treats as denied.
    pub fn from_headers(headers: &HeaderMap, role_header: &str) -> Option<Self> {
        let value = headers.get(role_header)?.to_str().ok()?;
        let role: Role = value.trim().parse().ok()?;
        Some(Self::new(role))
    }
}
