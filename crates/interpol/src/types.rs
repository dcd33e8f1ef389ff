//! The closed set of cast targets.

/// What a placeholder casts its value to.
///
/// Decoded from the one-letter codes `s`, `i`, `f`, `d`, `b`. Adding a type
/// means adding a variant here, and the compiler walks you through every
/// match that needs updating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastType {
    /// `s` — quoted, escaped string
    Text,
    /// `i` — unquoted integer
    Int,
    /// `f` — quoted float (quoted so all locales parse it)
    Float,
    /// `d` — unquoted unix timestamp
    DateTime,
    /// `b` — unquoted `1` or `0`
    Bool,
}

impl CastType {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            's' => Some(CastType::Text),
            'i' => Some(CastType::Int),
            'f' => Some(CastType::Float),
            'd' => Some(CastType::DateTime),
            'b' => Some(CastType::Bool),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            CastType::Text => 's',
            CastType::Int => 'i',
            CastType::Float => 'f',
            CastType::DateTime => 'd',
            CastType::Bool => 'b',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for code in ['s', 'i', 'f', 'd', 'b'] {
            assert_eq!(CastType::from_code(code).unwrap().code(), code);
        }
        assert_eq!(CastType::from_code('z'), None);
        assert_eq!(CastType::from_code('S'), None);
    }
}
