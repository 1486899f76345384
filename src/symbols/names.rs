// src/symbols/names.rs
// Printable-punctuation vocabulary. These characters take their own
// codepoint as symbol id, so they live entirely below the sequential range
// that starts at SYMBOL_ID_OFFSET.

/// Highest codepoint in the character id space.
pub const MAX_CHAR_ID: u32 = '~' as u32;

/// True for characters that get codepoint-identified symbols: printable
/// ASCII punctuation, excluding alphanumerics and `_`.
pub fn is_symbol_char(c: char) -> bool {
    ('!'..='~').contains(&c) && !c.is_ascii_alphanumeric() && c != '_'
}

/// All symbol characters, in codepoint order.
pub fn symbol_chars() -> impl Iterator<Item = char> {
    ('!'..='~').filter(|&c| is_symbol_char(c))
}

/// Canonical constant name for a punctuation character.
pub fn display_name(c: char) -> Option<&'static str> {
    Some(match c {
        '!' => "BANG",
        '"' => "DOUBLE_QUOTE",
        '#' => "POUND",
        '$' => "DOLLAR",
        '%' => "MODULO",
        '&' => "AMPERSAND",
        '\'' => "SINGLE_QUOTE",
        '(' => "LPAREN",
        ')' => "RPAREN",
        '*' => "MULTIPLY",
        '+' => "PLUS",
        ',' => "COMMA",
        '-' => "MINUS",
        '.' => "PERIOD",
        '/' => "DIVIDE",
        ':' => "COLON",
        ';' => "SEMICOLON",
        '<' => "LESS_THAN",
        '=' => "EQUAL",
        '>' => "GREATER_THAN",
        '?' => "QUESTION_MARK",
        '@' => "AT_SYMBOL",
        '[' => "LEFT_BRACKET",
        '\\' => "BACK_SLASH",
        ']' => "RIGHT_BRACKET",
        '^' => "CIRCUMFLEX",
        '`' => "BACK_TICK",
        '{' => "LEFT_BRACE",
        '|' => "PIPE",
        '}' => "RIGHT_BRACE",
        '~' => "TILDE",
        _ => return None,
    })
}
