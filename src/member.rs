//! Member lookup request/response types and the coverage mapping.

use serde::{Deserialize, Serialize};

/// Insurance benefit classification returned for a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Coverage {
    Medical,
    Dental,
    Vision,
    None,
}

impl Coverage {
    /// Wire name. Must agree with the serde `UPPERCASE` rename above.
    pub fn as_str(&self) -> &'static str {
        match self {
            Coverage::Medical => "MEDICAL",
            Coverage::Dental => "DENTAL",
            Coverage::Vision => "VISION",
            Coverage::None => "NONE",
        }
    }
}

impl std::fmt::Display for Coverage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Incoming lookup payload.
///
/// The identifier is opaque and never validated. A missing or `null`
/// `memberId` deserializes to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRequest {
    #[serde(default)]
    pub member_id: Option<String>,
}

/// Lookup result. `member_id` echoes the request; an absent ID serializes as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub member_id: Option<String>,
    pub coverage: Coverage,
}

/// Every member is currently covered as medical.
pub const DEFAULT_COVERAGE: Coverage = Coverage::Medical;

/// Map a lookup request to its response.
pub fn lookup_coverage(request: MemberRequest) -> MemberResponse {
    MemberResponse {
        member_id: request.member_id,
        coverage: DEFAULT_COVERAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(member_id: &str) -> MemberRequest {
        MemberRequest {
            member_id: Some(member_id.to_string()),
        }
    }

    #[test]
    fn test_lookup_echoes_member_id() {
        for id in ["1234567890", "", "not a real id", "  ", "ü-42"] {
            let response = lookup_coverage(request(id));
            assert_eq!(response.member_id.as_deref(), Some(id));
            assert_eq!(response.coverage, Coverage::Medical);
        }
    }

    #[test]
    fn test_lookup_is_idempotent() {
        let first = lookup_coverage(request("1234567890"));
        let second = lookup_coverage(request("1234567890"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_without_member_id() {
        let response = lookup_coverage(MemberRequest::default());
        assert_eq!(response.member_id, None);
        assert_eq!(response.coverage, Coverage::Medical);
    }

    #[test]
    fn test_request_uses_camel_case() {
        let parsed: MemberRequest = serde_json::from_value(json!({"memberId": "42"})).unwrap();
        assert_eq!(parsed, request("42"));
    }

    #[test]
    fn test_request_missing_or_null_member_id() {
        let missing: MemberRequest = serde_json::from_value(json!({})).unwrap();
        let null: MemberRequest = serde_json::from_value(json!({"memberId": null})).unwrap();
        assert_eq!(missing.member_id, None);
        assert_eq!(null.member_id, None);
    }

    #[test]
    fn test_response_wire_format() {
        let body = serde_json::to_value(lookup_coverage(request("1234567890"))).unwrap();
        assert_eq!(body, json!({"memberId": "1234567890", "coverage": "MEDICAL"}));

        let body = serde_json::to_value(lookup_coverage(MemberRequest::default())).unwrap();
        assert_eq!(body, json!({"memberId": null, "coverage": "MEDICAL"}));
    }

    #[test]
    fn test_coverage_names() {
        let all = [
            Coverage::Medical,
            Coverage::Dental,
            Coverage::Vision,
            Coverage::None,
        ];
        for coverage in all {
            assert_eq!(serde_json::to_value(coverage).unwrap(), json!(coverage.as_str()));
            let parsed: Coverage = serde_json::from_value(json!(coverage.as_str())).unwrap();
            assert_eq!(parsed, coverage);
            assert_eq!(coverage.to_string(), coverage.as_str());
        }
        assert_eq!(Coverage::None.to_string(), "NONE");
    }
}
