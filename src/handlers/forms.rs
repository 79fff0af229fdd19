//! Minimal URL-encoded form parsing that keeps repeated keys.
//!
//! The generate form posts `topics` once per checked checkbox, in document
//! order; serde-based extractors collapse repeats, so the body is parsed
//! by hand.

/// Decode a URL-encoded string (form data): `+` → space, `%HH` → byte.
/// Malformed escapes pass through literally. Works on the byte buffer,
/// never by string index: the two bytes after a `%` may sit inside a
/// multibyte character.
fn url_decode(s: &str) -> String {
    let s = s.replace('+', " ");
    let b = s.as_bytes();
    let mut out = Vec::with_capacity(b.len());
    let mut i = 0;
    while i < b.len() {
        if b[i] == b'%' && i + 2 < b.len() {
            let byte = std::str::from_utf8(&b[i + 1..i + 3])
                .ok()
                .and_then(|h| u8::from_str_radix(h, 16).ok());
            if let Some(byte) = byte {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(b[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_default()
}

/// Parse a URL-encoded form body into key-value pairs, preserving order
/// and duplicates.
pub fn parse_form_body(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|s| !s.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            Some((url_decode(k), url_decode(v)))
        })
        .collect()
}

/// All values submitted under one key, in submission order.
pub fn values<'a>(pairs: &'a [(String, String)], key: &str) -> Vec<&'a str> {
    pairs
        .iter()
        .filter(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
        .collect()
}

/// Checkbox semantics: present at all means checked.
pub fn is_checked(pairs: &[(String, String)], key: &str) -> bool {
    pairs.iter().any(|(k, _)| k == key)
}
