use contactdesk_core::validation::MESSAGE_MIN_CHARS;
use contactdesk_core::{validate, Field, RawInquiry, Violation};
use proptest::prelude::*;

// Non-whitespace runs, so trimming never changes them
fn arb_word() -> impl Strategy<Value = String> {
    "[A-Za-z0-9田中太郎あいう]{1,12}"
}

fn arb_email() -> impl Strategy<Value = String> {
    ("[A-Za-z0-9._+-]{1,10}", "[A-Za-z0-9-]{1,10}", "[A-Za-z]{2,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

fn arb_message() -> impl Strategy<Value = String> {
    "[^\\s]{10,80}"
}

proptest! {
    /// Property: any well-formed triple validates, email lower-cased
    #[test]
    fn prop_valid_triples_accepted(
        name in arb_word(),
        email in arb_email(),
        message in arb_message(),
    ) {
        let result = validate(&RawInquiry::new(name.as_str(), email.as_str(), message.as_str()));
        prop_assert!(result.is_ok());

        let new = result.unwrap();
        prop_assert_eq!(new.name(), name.as_str());
        let lower = email.to_lowercase();
        prop_assert_eq!(new.email(), lower.as_str());
        prop_assert_eq!(new.message(), message.as_str());
    }

    /// Property: short messages always fail, with exactly one message error
    #[test]
    fn prop_short_message_rejected(
        name in arb_word(),
        email in arb_email(),
        message in "[^\\s]{1,9}",
    ) {
        let errors = validate(&RawInquiry::new(name.as_str(), email.as_str(), message.as_str()))
            .unwrap_err();

        prop_assert_eq!(errors.len(), 1);
        prop_assert_eq!(
            errors.get(Field::Message).map(|e| e.violation),
            Some(Violation::TooShort { min: MESSAGE_MIN_CHARS })
        );
    }

    /// Property: one error per violated field, never more
    #[test]
    fn prop_one_error_per_violated_field(
        drop_name in any::<bool>(),
        drop_email in any::<bool>(),
        short_message in any::<bool>(),
        email in arb_email(),
    ) {
        let name = if drop_name { "" } else { "Ann" };
        let email = if drop_email { String::new() } else { email };
        let message = if short_message { "short" } else { "long enough message" };

        let expected = [drop_name, drop_email, short_message]
            .iter()
            .filter(|v| **v)
            .count();

        match validate(&RawInquiry::new(name, email.as_str(), message)) {
            Ok(_) => prop_assert_eq!(expected, 0),
            Err(errors) => prop_assert_eq!(errors.len(), expected),
        }
    }

    /// Property: validation never panics on arbitrary text
    #[test]
    fn prop_never_panics(name in ".*", email in ".*", message in ".*") {
        let _ = validate(&RawInquiry::new(name.as_str(), email.as_str(), message.as_str()));
    }
}
