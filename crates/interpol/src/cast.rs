//! Casting resolved values into SQL literals.

use crate::types::CastType;
use crate::value::Value;

/// Driver-provided escaping for a scalar's textual form.
///
/// Implementations must make the text injection-safe but must *not* add
/// quotes; quoting is the caster's job. Every [`crate::Connection`] is an
/// `Escape` via a blanket impl.
pub trait Escape {
    fn escape(&self, raw: &str) -> String;
}

/// Cast one resolved value into its final literal.
///
/// - null + `nullable` emits the literal `NULL`;
/// - date-time values collapse to their unix timestamp before anything else;
/// - null without `nullable` coerces to the target kind's zero value
///   (`''`, `0`, `'0'`, `0`, falsey) rather than erroring;
/// - scalar-casting a sequence also coerces to the zero value (sequences
///   belong under the `j` flag) and logs a warning.
///
/// Pure apart from the escape call; safe to use for ad-hoc values outside a
/// full template expansion.
pub fn cast_value(value: &Value, ty: CastType, nullable: bool, esc: &dyn Escape) -> String {
    if value.is_null() && nullable {
        return "NULL".to_owned();
    }
    if matches!(value, Value::List(_)) {
        tracing::warn!(ty = ?ty, "scalar cast of a sequence; did you mean the `j` flag?");
    }
    let value = match value {
        Value::DateTime(dt) => Value::Int(dt.timestamp()),
        other => other.clone(),
    };
    match ty {
        CastType::DateTime => value.as_int().to_string(),
        CastType::Bool => (if value.is_truthy() { "1" } else { "0" }).to_owned(),
        CastType::Int => {
            // `@`-prefixed strings pass through uncoerced so driver-side
            // variables like `@last_insert_id` survive an integer token.
            let text = match &value {
                Value::String(s) if s.starts_with('@') => s.clone(),
                other => other.as_int().to_string(),
            };
            esc.escape(&text)
        }
        // Floats are quoted alongside strings so the literal parses the
        // same under every server locale.
        CastType::Text => format!("'{}'", esc.escape(&value.as_text())),
        CastType::Float => format!("'{}'", esc.escape(&value.as_float().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    /// Deterministic test escaper: doubles single quotes.
    struct Doubling;

    impl Escape for Doubling {
        fn escape(&self, raw: &str) -> String {
            raw.replace('\'', "''")
        }
    }

    fn cast(value: impl Into<Value>, ty: CastType, nullable: bool) -> String {
        cast_value(&value.into(), ty, nullable, &Doubling)
    }

    #[test]
    fn test_text_is_quoted_and_escaped() {
        assert_eq!(cast("O'Reilly", CastType::Text, false), "'O''Reilly'");
        assert_eq!(cast(42i64, CastType::Text, false), "'42'");
    }

    #[test]
    fn test_nullable_null_is_the_null_literal() {
        for ty in [
            CastType::Text,
            CastType::Int,
            CastType::Float,
            CastType::DateTime,
            CastType::Bool,
        ] {
            assert_eq!(cast(None::<i64>, ty, true), "NULL");
        }
    }

    #[test]
    fn test_non_nullable_null_coerces_to_zero_values() {
        assert_eq!(cast(None::<i64>, CastType::Text, false), "''");
        assert_eq!(cast(None::<i64>, CastType::Int, false), "0");
        assert_eq!(cast(None::<i64>, CastType::Float, false), "'0'");
        assert_eq!(cast(None::<i64>, CastType::DateTime, false), "0");
        assert_eq!(cast(None::<i64>, CastType::Bool, false), "0");
    }

    #[test]
    fn test_bool_is_bare_and_truthy_based() {
        assert_eq!(cast(true, CastType::Bool, false), "1");
        assert_eq!(cast(false, CastType::Bool, false), "0");
        assert_eq!(cast("0", CastType::Bool, false), "0");
        assert_eq!(cast("yes", CastType::Bool, false), "1");
        assert_eq!(cast(3i64, CastType::Bool, false), "1");
    }

    #[test]
    fn test_datetime_is_a_bare_timestamp() {
        let dt = DateTime::from_timestamp(1_600_000_000, 0).unwrap();
        assert_eq!(cast(dt, CastType::DateTime, false), "1600000000");
        // other codes see the timestamp too
        assert_eq!(cast(dt, CastType::Text, false), "'1600000000'");
        assert_eq!(cast(dt, CastType::Int, false), "1600000000");
    }

    #[test]
    fn test_string_under_datetime_code_int_casts() {
        assert_eq!(cast("1600000000junk", CastType::DateTime, false), "1600000000");
    }

    #[test]
    fn test_at_prefixed_string_passes_through_integer_cast() {
        assert_eq!(
            cast("@last_insert_id", CastType::Int, false),
            "@last_insert_id"
        );
        // only the integer code gets the passthrough
        assert_eq!(cast("@x", CastType::Text, false), "'@x'");
        assert_eq!(cast("@x", CastType::Float, false), "'0'");
    }

    #[test]
    fn test_int_is_unquoted() {
        assert_eq!(cast(7i64, CastType::Int, false), "7");
        assert_eq!(cast("12ab", CastType::Int, false), "12");
    }

    #[test]
    fn test_float_is_quoted() {
        assert_eq!(cast(12.5f64, CastType::Float, false), "'12.5'");
    }
}
