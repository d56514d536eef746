//! Escaping for host values embedded in guest script string literals.
//!
//! Every host-derived value that ends up inside a quoted literal in a
//! generated script (monitor labels, process output, error messages) goes
//! through here. Host-authored script fragments never do.

/// Escape `raw` for use between matching quotes in a guest script.
///
/// Backslash and both quote characters get a backslash prefix, line
/// terminators become escape sequences, everything else is copied.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 8);
    for c in raw.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Escape an arbitrary byte string.
///
/// ASCII follows [`escape`]. Bytes from 0x80 up are written as `\xNN`, so
/// the guest sees one code unit per input byte.
pub fn escape_bytes(raw: &[u8]) -> String {
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);
    for &b in raw {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\'' => out.push_str("\\'"),
            b'"' => out.push_str("\\\""),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            0x80.. => {
                out.push_str("\\x");
                out.push(hex_digit(b >> 4));
                out.push(hex_digit(b & 0x0f));
            }
            b => out.push(char::from(b)),
        }
    }
    out
}

/// `escape(raw)` wrapped in single quotes.
pub fn quote(raw: &str) -> String {
    format!("'{}'", escape(raw))
}

/// `escape_bytes(raw)` wrapped in single quotes.
pub fn quote_bytes(raw: &[u8]) -> String {
    format!("'{}'", escape_bytes(raw))
}

fn hex_digit(nibble: u8) -> char {
    char::from(b"0123456789abcdef"[usize::from(nibble & 0x0f)])
}

// =============================================================================
// TESTS
// =============================================================================
