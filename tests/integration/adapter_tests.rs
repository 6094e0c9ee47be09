//! Async adapter integration tests
//!
//! Wraps fake raising services and checks what comes out the other side.

#[cfg(test)]
mod tests {
    use crate::common::assertions::FailureAssertions;
    use crate::common::{FlakyService, UserDirectory};
    use crate::{assert_err, assert_ok, assert_success};
    use outcome_rs::{AdapterConfig, Outcome, OutcomeError, try_or_raise, try_result, try_result_with};
    use std::error::Error as _;

    /// Test that a healthy upstream becomes a success
    #[tokio::test]
    async fn test_wraps_healthy_service() {
        let service = FlakyService::failing(0);
        let outcome = try_result(|| service.fetch("alpha")).await;
        assert_eq!(assert_success!(outcome), "value-of-alpha");
    }

    /// Test that a raised io::Error becomes a failure with its cause kept
    #[tokio::test]
    async fn test_wraps_failing_service() {
        let service = FlakyService::failing(1);
        let outcome = try_result(|| service.fetch("alpha")).await;

        outcome.assert_failed_with_message("timed out fetching alpha");
        let cause = outcome.error().and_then(|e| e.source());
        assert!(cause.is_some());
        assert_eq!(service.calls(), 1);
    }

    /// Test that the adapter invokes the operation exactly once
    #[tokio::test]
    async fn test_no_retry() {
        let service = FlakyService::failing(1);
        let _ = try_result(|| service.fetch("beta")).await;
        let second = try_result(|| service.fetch("beta")).await;

        assert_eq!(service.calls(), 2);
        assert_eq!(assert_success!(second), "value-of-beta");
    }

    /// Test that a service panic becomes a failure
    #[tokio::test]
    async fn test_panicking_service() {
        let service = FlakyService::failing(0);
        let outcome = try_result(|| service.fetch_or_panic("gamma")).await;
        outcome.assert_failed_with_message("client bug while fetching gamma");
    }

    /// Test that an outcome-returning service is not double wrapped
    #[tokio::test]
    async fn test_collapses_outcome_returning_service() {
        let directory = UserDirectory::with_users(&[(1, "ada")]);

        let found: Outcome<String> = try_result(|| directory.find(1)).await;
        assert_eq!(assert_success!(found), "ada");

        let missing: Outcome<String> = try_result(|| directory.find(2)).await;
        missing.assert_failed_with_message("user 2 not found");
    }

    /// Test the raising form keeps the original error
    #[tokio::test]
    async fn test_raising_form_returns_original_error() {
        let original = OutcomeError::new("quota exhausted");
        let raised = original.clone();

        let result = try_or_raise(|| async move { Err::<u32, _>(raised) }).await;
        let returned = assert_err!(result);
        assert!(OutcomeError::ptr_eq(&returned, &original));
    }

    /// Test the raising form composes with `?`
    #[tokio::test]
    async fn test_raising_form_with_question_mark() {
        async fn lookup(service: &FlakyService) -> outcome_rs::Result<usize> {
            let value = try_or_raise(|| service.fetch("delta")).await?;
            Ok(value.len())
        }

        let healthy = FlakyService::failing(0);
        assert_eq!(assert_ok!(lookup(&healthy).await), "value-of-delta".len());

        let broken = FlakyService::failing(1);
        let error = assert_err!(lookup(&broken).await);
        assert_eq!(error.message(), "timed out fetching delta");
    }

    /// Test that spawned tasks can run the adapter
    #[tokio::test]
    async fn test_runs_inside_spawned_task() {
        let handle = tokio::spawn(async {
            try_result(|| async { Err::<(), _>("from task") }).await
        });
        let outcome = handle.await.unwrap();
        outcome.assert_failed_with_message("from task");
    }

    /// Test that the adapter can be configured to stay quiet
    #[tokio::test]
    async fn test_quiet_configuration() {
        let config = AdapterConfig::new().log_failures(false);
        let outcome = try_result_with(&config, || async { Err::<(), _>("silent") }).await;
        outcome.assert_failed_with_message("silent");
    }
}
