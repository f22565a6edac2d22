//! Member coverage lookup endpoint.

use axum::{extract::rejection::JsonRejection, Json};

use crate::error::AppError;
use crate::member::{lookup_coverage, MemberRequest, MemberResponse};

/// `POST /members` handler.
///
/// Echoes the member ID with its coverage. Body extraction failures are
/// reported through `AppError`; the lookup itself always succeeds.
pub async fn lookup(
    payload: Result<Json<MemberRequest>, JsonRejection>,
) -> Result<Json<MemberResponse>, AppError> {
    let Json(request) = payload?;
    let response = lookup_coverage(request);

    tracing::debug!(
        member_id = ?response.member_id,
        coverage = %response.coverage,
        "Resolved member coverage"
    );

    Ok(Json(response))
}
