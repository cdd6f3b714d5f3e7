macro_rules! byte_map {
    {
        $(#[$meta:meta])*
        $vis:vis fn $fn_id:ident($byte:ident:$u8:ty) { $e:expr }
    } => {
        $(#[$meta])*
        $vis fn $fn_id($byte: $u8) -> bool {
            static PAT: [bool; 256] = {
                let mut bytes = [false; 256];
                let mut $byte = 0u8;
                const fn filter($byte: $u8) -> bool {
                    $e
                }
                loop {
                    bytes[$byte as usize] = filter($byte);
                    if $byte == 255 {
                        break;
                    }
                    $byte += 1;
                }
                bytes
            };
            PAT[$byte as usize]
        }
    };
}

// ===== Blocks =====

/// unreserved = ALPHA / DIGIT / "-" / "." / "_" / "~"
const fn unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~')
}

/// sub-delims = "!" / "$" / "&" / "'" / "(" / ")"
///            / "*" / "+" / "," / ";" / "="
const fn sub_delims(byte: u8) -> bool {
    matches!(
        byte,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

// ===== lookup table =====

byte_map! {
    /// scheme = ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
    #[inline(always)]
    pub fn is_scheme(byte: u8) {
        byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'-' | b'.')
    }
}

byte_map! {
    /// reg-name = *( unreserved / pct-encoded / sub-delims )
    ///
    /// non-ASCII bytes are let through, hosts are not IDNA processed
    #[inline(always)]
    pub fn is_regname(byte: u8) {
        unreserved(byte) || sub_delims(byte) || byte == b'%' || byte >= 0x80
    }
}

byte_map! {
    /// hex / ":" / "." plus the IPvFuture characters
    ///
    /// the literal itself is not validated
    #[inline(always)]
    pub fn is_ip_literal(byte: u8) {
        unreserved(byte) || sub_delims(byte) || byte == b':'
    }
}

// ===== Split =====

/// Split at the last '@', userinfo may itself contain '@'.
pub fn split_at_sign(bytes: &str) -> Option<(&str, &str)> {
    bytes.rsplit_once('@')
}

/// Split trailing ':' followed by digits.
///
/// A colon inside an IP literal is not a port delimiter.
pub fn split_port(bytes: &str) -> Option<(&str, &str)> {
    let mut state = bytes.as_bytes();

    while let [lead @ .., byte] = state {
        if byte.is_ascii_digit() {
            state = lead;
        } else if *byte == b':' {
            if matches!(lead.first(), Some(b'[')) && lead.last() != Some(&b']') {
                return None;
            }
            return Some((&bytes[..lead.len()], &bytes[state.len()..]));
        } else {
            return None;
        }
    }

    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split_at_sign() {
        assert!(split_at_sign("example.com").is_none());

        let (left, right) = split_at_sign("user:passwd@example.com").unwrap();
        assert_eq!(left, "user:passwd");
        assert_eq!(right, "example.com");

        let (left, right) = split_at_sign("a@b").unwrap();
        assert_eq!(left, "a");
        assert_eq!(right, "b");

        let (left, right) = split_at_sign("a@b@example.com").unwrap();
        assert_eq!(left, "a@b");
        assert_eq!(right, "example.com");
    }

    #[test]
    fn test_split_port() {
        assert!(split_port("example.com").is_none());
        assert!(split_port("[a2f::1]").is_none());

        let (left, right) = split_port("example.com:443").unwrap();
        assert_eq!(left, "example.com");
        assert_eq!(right, "443");

        let (left, right) = split_port("[a2f::1]:443").unwrap();
        assert_eq!(left, "[a2f::1]");
        assert_eq!(right, "443");

        let (left, right) = split_port("example.com:").unwrap();
        assert_eq!(left, "example.com");
        assert_eq!(right, "");
    }

    #[test]
    fn test_byte_class() {
        assert!(is_scheme(b'h'));
        assert!(is_scheme(b'+'));
        assert!(!is_scheme(b':'));

        assert!(is_regname(b'%'));
        assert!(is_regname(0xc3));
        assert!(!is_regname(b':'));
        assert!(!is_regname(b' '));

        assert!(is_ip_literal(b':'));
        assert!(!is_ip_literal(b'/'));
    }
}
