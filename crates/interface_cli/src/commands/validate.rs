//! `validate` command

use std::io::Write;

use domain_validation::{validate, RuleName};

use crate::error::CliError;

pub(super) fn run<W>(rule: RuleName, value: &str, required: bool, out: &mut W) -> anyhow::Result<()>
where
    W: Write + Send,
{
    match validate(value, rule, required) {
        None => {
            writeln!(out, "valid {}", rule)?;
            Ok(())
        }
        Some(message) => Err(CliError::InvalidValue {
            rule,
            value: value.to_string(),
            message,
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_value_is_reported() {
        let mut out: Vec<u8> = Vec::new();
        run(RuleName::Pincode, "560001", true, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "valid pincode\n");
    }

    #[test]
    fn test_invalid_value_fails_with_rule_message() {
        let mut out: Vec<u8> = Vec::new();
        let error = run(RuleName::Pincode, "056001", true, &mut out).unwrap_err();
        let error = error.downcast::<CliError>().unwrap();
        assert!(matches!(error, CliError::InvalidValue { rule: RuleName::Pincode, .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn test_optional_empty_value_is_valid() {
        let mut out: Vec<u8> = Vec::new();
        run(RuleName::Email, "", false, &mut out).unwrap();
        assert!(run(RuleName::Email, "", true, &mut Vec::<u8>::new()).is_err());
    }
}
