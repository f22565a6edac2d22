//! member-function: member coverage lookup over HTTP.
//!
//! Exposes a single JSON endpoint, `POST /members`, that echoes the caller's
//! member ID together with its coverage classification.

pub mod config;
pub mod error;
pub mod http;
pub mod member;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use member::{lookup_coverage, Coverage, MemberRequest, MemberResponse};
pub use routes::create_router;
