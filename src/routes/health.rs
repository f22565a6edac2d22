//! Liveness probe for container orchestration and load balancers.

/// Returns "ok" whenever the process can answer HTTP.
pub async fn health() -> &'static str {
    "ok"
}
