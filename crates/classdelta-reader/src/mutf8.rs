//! Modified UTF-8 as used by `CONSTANT_Utf8` entries.
//!
//! NUL is encoded as `C0 80`, and supplementary characters as two
//! three-byte surrogate halves.

use classdelta_core::errors::ExError;

use crate::errors::malformed;

pub(crate) fn decode(bytes: &[u8]) -> Result<String, ExError> {
    let mut units: Vec<u16> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b0 = bytes[i];
        let (unit, width) = if b0 & 0x80 == 0 {
            (u16::from(b0), 1)
        } else if b0 & 0xE0 == 0xC0 {
            let b1 = continuation(bytes, i + 1)?;
            ((u16::from(b0 & 0x1F) << 6) | b1, 2)
        } else if b0 & 0xF0 == 0xE0 {
            let b1 = continuation(bytes, i + 1)?;
            let b2 = continuation(bytes, i + 2)?;
            ((u16::from(b0 & 0x0F) << 12) | (b1 << 6) | b2, 3)
        } else {
            return Err(malformed(format!(
                "invalid modified UTF-8 lead byte 0x{:02x}",
                b0
            )));
        };
        units.push(unit);
        i += width;
    }
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| malformed(format!("invalid modified UTF-8: {}", e)))
}

fn continuation(bytes: &[u8], index: usize) -> Result<u16, ExError> {
    match bytes.get(index) {
        Some(b) if b & 0xC0 == 0x80 => Ok(u16::from(b & 0x3F)),
        _ => Err(malformed("truncated modified UTF-8 sequence")),
    }
}

#[cfg(any(test, feature = "writer"))]
pub(crate) fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for unit in s.encode_utf16() {
        match unit {
            0x0001..=0x007F => out.push(unit as u8),
            0x0000 | 0x0080..=0x07FF => {
                out.push(0xC0 | (unit >> 6) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
            _ => {
                out.push(0xE0 | (unit >> 12) as u8);
                out.push(0x80 | ((unit >> 6) & 0x3F) as u8);
                out.push(0x80 | (unit & 0x3F) as u8);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_and_supplementary_characters() {
        let text = "a\u{0}b\u{1F600}é";
        let encoded = encode(text);
        assert_eq!(&encoded[1..3], &[0xC0, 0x80]);
        assert!(!encoded.windows(4).any(|w| w[0] == 0xF0));
        assert_eq!(decode(&encoded).unwrap(), text);
    }

    #[test]
    fn test_rejects_four_byte_utf8() {
        assert!(decode("\u{1F600}".as_bytes()).is_err());
    }
}
