//! Character classes of the surface syntax.

/// Every code point accepted as "abstraction", ASCII backslash included.
pub const LAMBDAS: &[char] = &[
    'Λ', 'λ', 'ᴧ', 'Ⲗ', 'ⲗ', '𝚲', '𝛌', '𝛬', '𝜆', '𝜦', '𝝀', '𝝠', '𝝺', '𝞚', '𝞴', '\\',
];

/// Glyph used when printing abstractions.
pub const CANONICAL_LAMBDA: char = 'λ';

/// Separates an abstraction's parameter from its body.
pub const DOT: &[char] = &['.'];

/// Opens a parenthesized group.
pub const OPEN_PAREN: &[char] = &['('];

/// Top-level assignment.
pub const EQUALS: &[char] = &['='];

/// Starts a comment running to the end of the line.
pub const COMMENT: char = '#';

/// Returns `true` if `ch` is one of the lambda glyphs.
#[inline]
pub fn is_lambda(ch: char) -> bool {
    LAMBDAS.contains(&ch)
}

/// Returns `true` if `ch` may appear in a variable name.
#[inline]
pub fn is_name_rune(ch: char) -> bool {
    !ch.is_whitespace() && !matches!(ch, '(' | ')' | '.' | '=') && !is_lambda(ch)
}

/// Human-readable form of a peeked rune (`None` is end of input).
pub fn describe_rune(found: Option<char>) -> String {
    match found {
        Some(ch) => format!("{ch:?}"),
        None => "end of input".to_string(),
    }
}

/// Human-readable form of an expected rune set.
pub fn describe_set(expected: &[char]) -> String {
    if expected == LAMBDAS {
        return "a lambda".to_string();
    }
    match expected {
        [single] => format!("{single:?}"),
        many => {
            let items: Vec<String> = many.iter().map(|ch| format!("{ch:?}")).collect();
            format!("one of {}", items.join(", "))
        }
    }
}
