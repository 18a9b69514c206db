/// Percent-encode a string the way `encodeURIComponent` does.
///
/// ASCII alphanumerics and `-_.!~*'()` pass through; every other byte of the
/// UTF-8 encoding becomes `%XX` with uppercase hex.
pub fn encode_uri_component(input: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";

    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric() || b"-_.!~*'()".contains(&byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    out
}

/// Reverse of [`encode_uri_component`].
///
/// Malformed escapes are kept literally; invalid UTF-8 is replaced.
pub fn decode_uri_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push((hi << 4) | lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_space() {
        assert_eq!(encode_uri_component("Space Travel"), "Space%20Travel");
    }

    #[test]
    fn test_encode_reserved_and_unreserved() {
        assert_eq!(encode_uri_component("a/b?c&d=e"), "a%2Fb%3Fc%26d%3De");
        assert_eq!(encode_uri_component("it's (fine)!~*"), "it's%20(fine)!~*");
    }

    #[test]
    fn test_encode_utf8() {
        assert_eq!(encode_uri_component("café"), "caf%C3%A9");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_uri_component("Space%20Travel"), "Space Travel");
        assert_eq!(decode_uri_component("caf%c3%a9"), "café");
    }

    #[test]
    fn test_decode_malformed_escape_is_literal() {
        assert_eq!(decode_uri_component("100%"), "100%");
        assert_eq!(decode_uri_component("%zz"), "%zz");
        assert_eq!(decode_uri_component("%4"), "%4");
    }
}
