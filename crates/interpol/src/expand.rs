//! Folding tokens back into the final statement.

use crate::cast::{Escape, cast_value};
use crate::error::Error;
use crate::resolve::{Params, resolve};
use crate::token::{Token, scan};
use crate::value::Value;

/// Expand a template into a single escaped literal SQL string.
///
/// Placeholders are resolved in template order against `params` with one
/// shared position cursor that advances on *every* placeholder, named or
/// positional. A positional placeholder therefore indexes the parameter
/// collection at "number of placeholders seen so far", named entries
/// included. This coupling is load-bearing for compatibility; do not fix it.
///
/// An empty parameter set returns the template unchanged without scanning,
/// so placeholder-shaped text in a parameterless template is never
/// validated.
///
/// Any template or cast error aborts the whole expansion; no partial output
/// is ever returned.
pub fn expand(template: &str, params: &Params, esc: &dyn Escape) -> Result<String, Error> {
    if params.is_empty() {
        return Ok(template.to_owned());
    }

    let mut out = String::with_capacity(template.len());
    let mut cursor = 0usize;
    for token in scan(template) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Placeholder(ph) => {
                let spec = ph.cast_spec()?;
                let value = resolve(params, ph.kind, cursor);
                cursor += 1;
                if spec.join {
                    let Value::List(items) = value else {
                        return Err(Error::JoinOnNonSequence {
                            token: ph.raw.to_owned(),
                        });
                    };
                    let parts: Vec<String> = items
                        .iter()
                        .map(|item| cast_value(item, spec.ty, spec.nullable, esc))
                        .collect();
                    out.push_str(&parts.join(", "));
                } else {
                    out.push_str(&cast_value(value, spec.ty, spec.nullable, esc));
                }
            }
        }
    }
    tracing::debug!(placeholders = cursor, "expanded query template");
    Ok(out)
}
