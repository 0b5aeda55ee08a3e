//! Validation error reporting.
//!
//! Partitions codec findings into unfixable and fixable groups, prints
//! them grouped, and hands the aggregate booleans back to the caller.
//! Escalating findings into failures is the caller's responsibility.

use crate::codec::ValidationError;
use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};

/// Aggregate verdict of one validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub contains_unfixable: bool,
    pub contains_fixable: bool,
}

/// Decode the hex, run the validator, and report findings to `out`.
///
/// Groups are printed unfixable first, each error on its own line in the
/// order the validator returned it. With an empty finding list the success
/// line is printed only when `announce_success` is set.
pub fn write_validation_errors<W: Write>(
    out: &mut W,
    cbor_hex: &str,
    validate: impl FnOnce(&[u8]) -> Vec<ValidationError>,
    announce_success: bool,
) -> Result<ValidationOutcome> {
    let cbor = hex::decode(cbor_hex)?;
    let validation_errors = validate(&cbor);

    let (fixable, unfixable): (Vec<_>, Vec<_>) =
        validation_errors.iter().partition(|e| e.fixable);

    for (title, errors) in [("unfixable", &unfixable), ("fixable", &fixable)] {
        if !errors.is_empty() {
            let header = format!("The transaction contains following {} errors:", title);
            writeln!(out, "{}", header.as_str().bold()).map_err(io_error)?;
            for e in errors {
                writeln!(out, "- {} ({})", e.reason, e.position).map_err(io_error)?;
            }
        }
    }

    if validation_errors.is_empty() && announce_success {
        writeln!(out, "{}", "The transaction CBOR is valid and canonical.".green())
            .map_err(io_error)?;
    }

    Ok(ValidationOutcome {
        contains_unfixable: !unfixable.is_empty(),
        contains_fixable: !fixable.is_empty(),
    })
}

/// [`write_validation_errors`] against stdout.
pub fn print_validation_errors(
    cbor_hex: &str,
    validate: impl FnOnce(&[u8]) -> Vec<ValidationError>,
    announce_success: bool,
) -> Result<ValidationOutcome> {
    write_validation_errors(&mut io::stdout(), cbor_hex, validate, announce_success)
}

fn io_error(source: io::Error) -> crate::error::Error {
    crate::error::Error::IoError { path: None, source }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn report(
        cbor_hex: &str,
        errors: Vec<ValidationError>,
        announce_success: bool,
    ) -> (String, ValidationOutcome) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let outcome =
            write_validation_errors(&mut out, cbor_hex, move |_| errors, announce_success)
                .unwrap();
        (String::from_utf8(out).unwrap(), outcome)
    }

    #[test]
    fn test_invalid_hex_propagates() {
        let mut out = Vec::new();
        let result = write_validation_errors(&mut out, "zz", |_| Vec::new(), true);
        assert!(matches!(result, Err(Error::InvalidHex(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_clean_with_announcement() {
        let (output, outcome) = report("84a0", Vec::new(), true);
        assert_eq!(output, "The transaction CBOR is valid and canonical.\n");
        assert!(!outcome.contains_unfixable);
        assert!(!outcome.contains_fixable);
    }

    #[test]
    fn test_clean_without_announcement_prints_nothing() {
        let (output, outcome) = report("84a0", Vec::new(), false);
        assert!(output.is_empty());
        assert!(!outcome.contains_unfixable);
        assert!(!outcome.contains_fixable);
    }

    #[test]
    fn test_unfixable_group_precedes_fixable() {
        // Validator returns the fixable finding first; the report still
        // prints the unfixable group first.
        let errors = vec![
            ValidationError::fixable("non-canonical map keys", "transaction.body"),
            ValidationError::unfixable("unexpected field", "transaction.body.9"),
        ];
        let (output, outcome) = report("84a0", errors, true);
        assert_eq!(
            output,
            "The transaction contains following unfixable errors:\n\
             - unexpected field (transaction.body.9)\n\
             The transaction contains following fixable errors:\n\
             - non-canonical map keys (transaction.body)\n"
        );
        assert!(outcome.contains_unfixable);
        assert!(outcome.contains_fixable);
    }

    #[test]
    fn test_group_order_is_stable() {
        let errors = vec![
            ValidationError::fixable("first", "a"),
            ValidationError::fixable("second", "b"),
            ValidationError::fixable("third", "c"),
        ];
        let (output, outcome) = report("84a0", errors, true);
        assert_eq!(
            output,
            "The transaction contains following fixable errors:\n\
             - first (a)\n\
             - second (b)\n\
             - third (c)\n"
        );
        assert!(!outcome.contains_unfixable);
        assert!(outcome.contains_fixable);
    }

    #[test]
    fn test_no_success_line_when_errors_present() {
        let errors = vec![ValidationError::unfixable("bad", "transaction")];
        let (output, _) = report("84a0", errors, true);
        assert!(!output.contains("valid and canonical"));
    }

    #[test]
    fn test_outcome_matches_partition() {
        let (_, outcome) = report(
            "84a0",
            vec![ValidationError::unfixable("bad", "transaction")],
            false,
        );
        assert!(outcome.contains_unfixable);
        assert!(!outcome.contains_fixable);
    }
}
