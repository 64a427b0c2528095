use axum::http::StatusCode;

use crate::domain::error::DomainError;

use super::form::FormError;
use super::problem::Problem;

pub const CODE_STORAGE: &str = "SOCIAL_DOCK_STORAGE";
pub const CODE_INTERNAL: &str = "SOCIAL_DOCK_INTERNAL";
pub const CODE_BAD_FORM: &str = "SOCIAL_DOCK_BAD_FORM";

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

fn finish(problem: Problem, instance: &str) -> Problem {
    let problem = problem.with_instance(instance);
    match current_trace_id() {
        Some(trace_id) => problem.with_trace_id(trace_id),
        None => problem,
    }
}

/// Map domain error to an RFC 9457 Problem.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::Storage(_) => {
            tracing::error!(error = ?e, "Settings storage error");
            Problem::new(
                StatusCode::SERVICE_UNAVAILABLE,
                "Storage Unavailable",
                "Settings storage is unavailable",
            )
            .with_type("urn:social-dock:error:storage")
            .with_code(CODE_STORAGE)
        }
        DomainError::Corrupted { .. } => {
            tracing::error!(error = ?e, "Unreadable settings reached the API");
            Problem::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An internal error occurred",
            )
            .with_type("urn:social-dock:error:internal")
            .with_code(CODE_INTERNAL)
        }
    };
    finish(problem, instance)
}

pub fn form_error_to_problem(e: &FormError, instance: &str) -> Problem {
    tracing::debug!(error = %e, "Rejected settings form");
    finish(
        Problem::new(StatusCode::BAD_REQUEST, "Bad Request", e.to_string())
            .with_type("urn:social-dock:error:bad-form")
            .with_code(CODE_BAD_FORM),
        instance,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_errors_map_to_503() {
        let e = DomainError::Storage(anyhow::anyhow!("pool timed out"));
        let p = domain_error_to_problem(&e, "/social-dock/v1/settings");
        assert_eq!(p.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(p.code, CODE_STORAGE);
        assert_eq!(p.instance, "/social-dock/v1/settings");
        assert!(!p.detail.contains("pool"));
    }

    #[test]
    fn corrupted_maps_to_500() {
        let p = domain_error_to_problem(&DomainError::corrupted("not an object"), "/widget");
        assert_eq!(p.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(p.code, CODE_INTERNAL);
    }
}
