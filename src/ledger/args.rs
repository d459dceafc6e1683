// Positional string argument helpers shared by the operations

use crate::ledger::LedgerError;
use std::num::IntErrorKind;

const POSITIONS: [&str; 3] = ["1st", "2nd", "3rd"];

/// Ordinal label for a zero-based argument index
pub(crate) fn position(index: usize) -> &'static str {
    POSITIONS.get(index).copied().unwrap_or("trailing")
}

pub(crate) fn expect_exactly<A: AsRef<str>>(
    args: &[A],
    count: usize,
    operation: &'static str,
    expected: &'static str,
) -> Result<(), LedgerError> {
    if args.len() != count {
        return Err(LedgerError::ArgumentCount {
            operation,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

pub(crate) fn expect_at_least<A: AsRef<str>>(
    args: &[A],
    count: usize,
    operation: &'static str,
    expected: &'static str,
) -> Result<(), LedgerError> {
    if args.len() < count {
        return Err(LedgerError::ArgumentCount {
            operation,
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

pub(crate) fn non_empty<A: AsRef<str>>(args: &[A], index: usize) -> Result<&str, LedgerError> {
    match args.get(index).map(AsRef::as_ref) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(LedgerError::ArgumentEmpty {
            position: position(index),
        }),
    }
}

pub(crate) fn integer(value: &str, index: usize) -> Result<i64, LedgerError> {
    value.parse::<i64>().map_err(|_| LedgerError::ArgumentType {
        position: position(index),
        value: value.to_string(),
    })
}

/// Parse an integer without failing: out-of-range values saturate to the
/// nearest bound, anything else that is not an integer becomes zero
pub(crate) fn integer_or_default(value: &str) -> i64 {
    match value.parse::<i64>() {
        Ok(parsed) => parsed,
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => i64::MAX,
            IntErrorKind::NegOverflow => i64::MIN,
            _ => 0,
        },
    }
}
