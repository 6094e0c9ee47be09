//! Assertion helper integration tests
//!
//! Guards used at the edges of small domain functions.

#[cfg(test)]
mod tests {
    use crate::common::assertions::FailureAssertions;
    use crate::{assert_err, assert_ok, assert_success};
    use outcome_rs::{
        Outcome, OutcomeError, check, check_not_nil, check_not_nil_with, check_or, ensure,
        ensure_not_nil, ensure_not_nil_with, ensure_or, failure, success,
    };

    struct Account {
        owner: Option<String>,
        balance: i64,
    }

    fn withdraw(account: &Account, amount: i64) -> outcome_rs::Result<i64> {
        ensure_not_nil_with(account.owner.as_ref(), "account has no owner")?;
        ensure_or(amount > 0, OutcomeError::new("amount must be positive"))?;
        ensure_or(
            account.balance >= amount,
            OutcomeError::new("insufficient funds"),
        )?;
        Ok(account.balance - amount)
    }

    /// Test the loud defaults
    #[test]
    fn test_ensure_defaults_raise() {
        assert_eq!(assert_err!(ensure(false)).message(), "Assertion failed");
        assert_eq!(
            assert_err!(ensure_not_nil(None::<u8>)).message(),
            "Expected value to be non-null"
        );
    }

    /// Test the total forms return failures
    #[test]
    fn test_check_forms_do_not_raise() {
        let error = OutcomeError::new("e");
        assert_eq!(check_or(false, error.clone()), failure(error));
        check(false).assert_failed_with_message("Assertion failed");
        check_not_nil_with(None::<u8>, "m").assert_failed_with_message("m");
    }

    /// Test that falsy but present values pass
    #[test]
    fn test_falsy_values_are_not_nil() {
        assert_eq!(assert_success!(check_not_nil(Some(0))), 0);
        assert!(!assert_success!(check_not_nil(Some(false))));
        assert_eq!(assert_success!(check_not_nil(Some(""))), "");
        assert_eq!(assert_ok!(ensure_not_nil(Some(0))), 0);
    }

    /// Test guards inside a domain function
    #[test]
    fn test_guards_in_domain_function() {
        let account = Account {
            owner: Some("ada".to_string()),
            balance: 100,
        };
        assert_eq!(assert_ok!(withdraw(&account, 30)), 70);
        assert_eq!(
            assert_err!(withdraw(&account, 0)).message(),
            "amount must be positive"
        );
        assert_eq!(
            assert_err!(withdraw(&account, 500)).message(),
            "insufficient funds"
        );

        let orphan = Account {
            owner: None,
            balance: 100,
        };
        assert_eq!(
            assert_err!(withdraw(&orphan, 10)).message(),
            "account has no owner"
        );
    }

    /// Test that passing guards yield `true`
    #[test]
    fn test_passing_guards_yield_true() {
        let passed: Outcome<bool> = check(1 + 1 == 2);
        assert_eq!(passed, success(true));
        assert!(assert_ok!(ensure(true)));
    }
}
