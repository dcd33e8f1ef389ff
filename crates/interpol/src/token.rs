//! Template scanner.
//!
//! Splits a query template into literal text spans and typed placeholders.
//! The grammar, kept bit-compatible with the engine this replaces:
//!
//! ```text
//! placeholder := named | positional
//! named       := ':' identifier '?'? flags
//! positional  := '?' flags
//! identifier  := [A-Za-z0-9_.-]*
//! flags       := [a-z]*        // default "sn" when empty
//! ```
//!
//! The identifier is greedy and its charset covers every lowercase letter,
//! so flags on a named placeholder only start after the `?` separator
//! (`:customerId?sn`). A bare `:` is a valid named placeholder with an
//! empty identifier.

use std::ops::Range;

use crate::error::Error;
use crate::types::CastType;

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'t> {
    /// Literal text, passed through verbatim.
    Text(&'t str),
    /// A substitution site.
    Placeholder(Placeholder<'t>),
}

/// A typed substitution site in a template.
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder<'t> {
    pub kind: ParamKind<'t>,
    /// The full matched token text, e.g. `:id?in` or `?ij`.
    pub raw: &'t str,
    /// Raw flag letters; empty means the `"sn"` default applies.
    pub flags: &'t str,
    /// Byte span of the token within the template.
    pub span: Range<usize>,
}

/// How a placeholder picks its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind<'t> {
    /// `:name` — looked up by name.
    Named(&'t str),
    /// `?` — looked up by the shared position cursor.
    Positional,
}

/// Decoded placeholder flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastSpec {
    pub ty: CastType,
    pub nullable: bool,
    pub join: bool,
}

impl Placeholder<'_> {
    /// Reduce the raw flags to a [`CastSpec`].
    ///
    /// Every `n` and `j` is stripped wherever it occurs; exactly one
    /// character must remain and it must be a known type code.
    pub fn cast_spec(&self) -> Result<CastSpec, Error> {
        let flags = if self.flags.is_empty() { "sn" } else { self.flags };
        let nullable = flags.contains('n');
        let join = flags.contains('j');
        let mut rest = flags.chars().filter(|&c| c != 'n' && c != 'j');
        match (rest.next(), rest.next()) {
            (Some(code), None) => match CastType::from_code(code) {
                Some(ty) => Ok(CastSpec { ty, nullable, join }),
                None => Err(Error::UnknownType {
                    code,
                    token: self.raw.to_owned(),
                }),
            },
            _ => Err(Error::MalformedToken {
                token: self.raw.to_owned(),
            }),
        }
    }
}

fn is_ident(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'.' || b == b'-'
}

/// Scan a template into tokens, left to right, preserving order.
///
/// Scanning itself never fails; flag validation happens when a placeholder's
/// [`CastSpec`] is requested during expansion.
pub fn scan(template: &str) -> Vec<Token<'_>> {
    let bytes = template.as_bytes();
    let mut tokens = Vec::new();
    let mut text_start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b != b':' && b != b'?' {
            i += 1;
            continue;
        }

        let start = i;
        let (kind, flag_start, end) = if b == b':' {
            let mut j = i + 1;
            while j < bytes.len() && is_ident(bytes[j]) {
                j += 1;
            }
            let name = &template[i + 1..j];
            // optional `?` separator before the flags
            let mut k = j;
            if k < bytes.len() && bytes[k] == b'?' {
                k += 1;
            }
            let flag_start = k;
            while k < bytes.len() && bytes[k].is_ascii_lowercase() {
                k += 1;
            }
            (ParamKind::Named(name), flag_start, k)
        } else {
            let flag_start = i + 1;
            let mut k = flag_start;
            while k < bytes.len() && bytes[k].is_ascii_lowercase() {
                k += 1;
            }
            (ParamKind::Positional, flag_start, k)
        };

        if text_start < start {
            tokens.push(Token::Text(&template[text_start..start]));
        }
        tokens.push(Token::Placeholder(Placeholder {
            kind,
            raw: &template[start..end],
            flags: &template[flag_start..end],
            span: start..end,
        }));
        text_start = end;
        i = end;
    }

    if text_start < template.len() {
        tokens.push(Token::Text(&template[text_start..]));
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders(template: &str) -> Vec<Placeholder<'_>> {
        scan(template)
            .into_iter()
            .filter_map(|t| match t {
                Token::Placeholder(p) => Some(p),
                Token::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn test_text_only() {
        let tokens = scan("SELECT 1");
        assert_eq!(tokens, vec![Token::Text("SELECT 1")]);
    }

    #[test]
    fn test_named_with_flags() {
        let phs = placeholders("WHERE id = :customerId?sn");
        assert_eq!(phs[0].kind, ParamKind::Named("customerId"));
        assert_eq!(phs[0].flags, "sn");
        assert_eq!(phs[0].raw, ":customerId?sn");
        assert_eq!(phs[0].span, 11..25);
    }

    #[test]
    fn test_named_identifier_is_greedy() {
        // no `?` separator: trailing lowercase letters belong to the name
        let phs = placeholders(":ordersn");
        assert_eq!(phs[0].kind, ParamKind::Named("ordersn"));
        assert_eq!(phs[0].flags, "");
    }

    #[test]
    fn test_named_identifier_charset() {
        let phs = placeholders(":order.line-item_2 ");
        assert_eq!(phs[0].kind, ParamKind::Named("order.line-item_2"));
    }

    #[test]
    fn test_bare_colon_is_an_empty_name() {
        let phs = placeholders("a : b");
        assert_eq!(phs[0].kind, ParamKind::Named(""));
        assert_eq!(phs[0].raw, ":");
    }

    #[test]
    fn test_positional() {
        let phs = placeholders("? ?i ?ijn");
        assert_eq!(phs.len(), 3);
        assert_eq!(phs[0].flags, "");
        assert_eq!(phs[1].flags, "i");
        assert_eq!(phs[2].flags, "ijn");
        assert!(phs.iter().all(|p| p.kind == ParamKind::Positional));
    }

    #[test]
    fn test_named_then_positional() {
        let phs = placeholders(":a?b?c");
        assert_eq!(phs.len(), 2);
        assert_eq!(phs[0].kind, ParamKind::Named("a"));
        assert_eq!(phs[0].flags, "b");
        assert_eq!(phs[1].kind, ParamKind::Positional);
        assert_eq!(phs[1].flags, "c");
    }

    #[test]
    fn test_tokens_preserve_surrounding_text() {
        let tokens = scan("a = :a?i AND b = ?s!");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], Token::Text("a = "));
        assert_eq!(tokens[2], Token::Text(" AND b = "));
        assert_eq!(tokens[4], Token::Text("!"));
    }

    #[test]
    fn test_default_flags() {
        let spec = placeholders("?")[0].cast_spec().unwrap();
        assert_eq!(spec.ty, CastType::Text);
        assert!(spec.nullable);
        assert!(!spec.join);
    }

    #[test]
    fn test_flag_reduction() {
        let spec = placeholders("?ijn")[0].cast_spec().unwrap();
        assert_eq!(spec.ty, CastType::Int);
        assert!(spec.nullable);
        assert!(spec.join);

        let spec = placeholders("?njd")[0].cast_spec().unwrap();
        assert_eq!(spec.ty, CastType::DateTime);
    }

    #[test]
    fn test_modifiers_alone_are_malformed() {
        let err = placeholders("?nj")[0].cast_spec().unwrap_err();
        assert!(matches!(err, Error::MalformedToken { token } if token == "?nj"));
    }

    #[test]
    fn test_two_type_codes_are_malformed() {
        let err = placeholders("?si")[0].cast_spec().unwrap_err();
        assert!(matches!(err, Error::MalformedToken { .. }));
    }

    #[test]
    fn test_unknown_type_code() {
        let err = placeholders(":x?z")[0].cast_spec().unwrap_err();
        match err {
            Error::UnknownType { code, token } => {
                assert_eq!(code, 'z');
                assert_eq!(token, ":x?z");
            }
            other => panic!("expected UnknownType, got {other:?}"),
        }
    }
}
