//! HTML character-reference decoding.
//!
//! Runs as the last substitution pass, after residual tags are stripped, so
//! entities inside already-removed attribute values never leak into the
//! output. Handles the named entities that actually occur in web prose plus
//! all numeric references (`&#8212;`, `&#x2014;`). Unknown or unterminated
//! references pass through unchanged.

/// Named entities worth knowing by name. Everything else a page is likely to
/// emit arrives as a numeric reference.
fn named_entity(name: &str) -> Option<&'static str> {
    let decoded = match name {
        "amp" => "&",
        "lt" => "<",
        "gt" => ">",
        "quot" => "\"",
        "apos" => "'",
        // Plain ASCII space, not U+00A0: a no-break space in Markdown output
        // defeats downstream line wrapping and diffing for no benefit.
        "nbsp" => " ",
        "copy" => "©",
        "reg" => "®",
        "trade" => "™",
        "hellip" => "…",
        "mdash" => "—",
        "ndash" => "–",
        "lsquo" => "\u{2018}",
        "rsquo" => "\u{2019}",
        "ldquo" => "\u{201C}",
        "rdquo" => "\u{201D}",
        "laquo" => "«",
        "raquo" => "»",
        "bull" => "•",
        "middot" => "·",
        "sect" => "§",
        "para" => "¶",
        "deg" => "°",
        "plusmn" => "±",
        "times" => "×",
        "divide" => "÷",
        "micro" => "µ",
        "euro" => "€",
        "pound" => "£",
        "cent" => "¢",
        "yen" => "¥",
        "dagger" => "†",
        "Dagger" => "‡",
        "larr" => "←",
        "rarr" => "→",
        "uarr" => "↑",
        "darr" => "↓",
        _ => return None,
    };
    Some(decoded)
}

/// Decode one reference body (the text between `&` and `;`).
fn decode_reference(body: &str) -> Option<char> {
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = body.strip_prefix('#') {
        return dec.parse::<u32>().ok().and_then(char::from_u32);
    }
    None
}

/// Decode all recognised HTML character references in `text`.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '&' {
            out.push(c);
            continue;
        }

        // Collect the reference body up to `;`. Bail on anything that cannot
        // appear in a reference so a bare `&` in prose stays untouched.
        let mut body = String::new();
        let mut terminated = false;
        while let Some(&next) = chars.peek() {
            if next == ';' {
                chars.next();
                terminated = true;
                break;
            }
            if !(next.is_ascii_alphanumeric() || next == '#') || body.len() > 32 {
                break;
            }
            body.push(next);
            chars.next();
        }

        if terminated {
            if let Some(s) = named_entity(&body) {
                out.push_str(s);
                continue;
            }
            if let Some(ch) = decode_reference(&body) {
                out.push(ch);
                continue;
            }
            // Unknown reference: reconstruct it verbatim.
            out.push('&');
            out.push_str(&body);
            out.push(';');
        } else {
            out.push('&');
            out.push_str(&body);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_core_named_entities() {
        assert_eq!(decode_entities("A &amp; B"), "A & B");
        assert_eq!(decode_entities("&lt;tag&gt;"), "<tag>");
        assert_eq!(decode_entities("&quot;hi&quot;"), "\"hi\"");
        assert_eq!(decode_entities("it&apos;s"), "it's");
        assert_eq!(decode_entities("a&nbsp;b"), "a b");
    }

    #[test]
    fn decodes_typographic_entities() {
        assert_eq!(decode_entities("wait&hellip;"), "wait…");
        assert_eq!(decode_entities("a&mdash;b"), "a—b");
        assert_eq!(decode_entities("&copy; 2024"), "© 2024");
    }

    #[test]
    fn decodes_decimal_references() {
        assert_eq!(decode_entities("&#38;"), "&");
        assert_eq!(decode_entities("&#8212;"), "—");
    }

    #[test]
    fn decodes_hex_references() {
        assert_eq!(decode_entities("&#x26;"), "&");
        assert_eq!(decode_entities("&#x2014;"), "—");
        assert_eq!(decode_entities("&#X2014;"), "—");
    }

    #[test]
    fn unknown_entity_passes_through() {
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
    }

    #[test]
    fn unterminated_reference_passes_through() {
        assert_eq!(decode_entities("&amp text"), "&amp text");
        assert_eq!(decode_entities("fish & chips"), "fish & chips");
    }

    #[test]
    fn invalid_codepoint_passes_through() {
        assert_eq!(decode_entities("&#xD800;"), "&#xD800;");
    }

    #[test]
    fn no_ampersand_fast_path() {
        assert_eq!(decode_entities("plain text"), "plain text");
    }
}
