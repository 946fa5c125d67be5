//! Per-field-code byte-level encode/decode.
//!
//! Integer codecs honour the endianness passed in by the caller; two's
//! complement with sign extension for signed widths. `t`/`T` are treated as
//! opaque 16-byte blobs with whole-array reversal under big-endian, never
//! arithmetic. `e` delegates to [`crate::half`].

use crate::format::Endian;
use crate::half;

macro_rules! int_codec {
    ($write:ident, $read:ident, $ty:ty) => {
        pub fn $write(buf: &mut [u8], offset: usize, value: $ty, endian: Endian) {
            let bytes = match endian {
                Endian::Little => value.to_le_bytes(),
                Endian::Big => value.to_be_bytes(),
            };
            buf[offset..offset + bytes.len()].copy_from_slice(&bytes);
        }

        pub fn $read(buf: &[u8], offset: usize, endian: Endian) -> $ty {
            const WIDTH: usize = std::mem::size_of::<$ty>();
            let mut raw = [0u8; WIDTH];
            raw.copy_from_slice(&buf[offset..offset + WIDTH]);
            match endian {
                Endian::Little => <$ty>::from_le_bytes(raw),
                Endian::Big => <$ty>::from_be_bytes(raw),
            }
        }
    };
}

int_codec!(write_i8, read_i8, i8);
int_codec!(write_u8, read_u8, u8);
int_codec!(write_i16, read_i16, i16);
int_codec!(write_u16, read_u16, u16);
int_codec!(write_i32, read_i32, i32);
int_codec!(write_u32, read_u32, u32);
int_codec!(write_i64, read_i64, i64);
int_codec!(write_u64, read_u64, u64);
int_codec!(write_f32_bits, read_f32_bits, f32);
int_codec!(write_f64_bits, read_f64_bits, f64);

/// Encode a half-precision value at `offset` under `endian`.
pub fn write_f16(buf: &mut [u8], offset: usize, value: f32, endian: Endian) {
    write_u16(buf, offset, half::encode(value), endian);
}

/// Decode a half-precision value at `offset` under `endian`.
pub fn read_f16(buf: &[u8], offset: usize, endian: Endian) -> f32 {
    half::decode(read_u16(buf, offset, endian))
}

/// Write a 16-byte opaque blob. Little-endian preserves host byte order;
/// big-endian reverses the whole array (spec.md §3 invariants).
pub fn write_bytes16(buf: &mut [u8], offset: usize, value: &[u8; 16], endian: Endian) {
    match endian {
        Endian::Little => buf[offset..offset + 16].copy_from_slice(value),
        Endian::Big => {
            for (i, &b) in value.iter().enumerate() {
                buf[offset + 15 - i] = b;
            }
        }
    }
}

/// Read a 16-byte opaque blob, reversing it back to host order under
/// big-endian so that pack-then-unpack is the identity under any endianness.
pub fn read_bytes16(buf: &[u8], offset: usize, endian: Endian) -> [u8; 16] {
    let mut out = [0u8; 16];
    match endian {
        Endian::Little => out.copy_from_slice(&buf[offset..offset + 16]),
        Endian::Big => {
            for i in 0..16 {
                out[i] = buf[offset + 15 - i];
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int16_little_endian() {
        let mut buf = [0u8; 2];
        write_i16(&mut buf, 0, -1234, Endian::Little);
        assert_eq!(read_i16(&buf, 0, Endian::Little), -1234);
    }

    #[test]
    fn uint32_big_endian_matches_scenario_s2() {
        let mut buf = [0u8; 4];
        write_u32(&mut buf, 0, 0xDEADBEEF, Endian::Big);
        assert_eq!(buf, [0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn uint16_little_endian_matches_scenario_s1() {
        let mut buf = [0u8; 2];
        write_u16(&mut buf, 0, 0x1234, Endian::Little);
        assert_eq!(buf, [0x34, 0x12]);
        assert_eq!(read_u16(&buf, 0, Endian::Little), 0x1234);
    }

    #[test]
    fn bytes16_little_endian_preserves_order() {
        let input: [u8; 16] = std::array::from_fn(|i| i as u8);
        let mut buf = [0u8; 16];
        write_bytes16(&mut buf, 0, &input, Endian::Little);
        assert_eq!(buf, input);
        assert_eq!(read_bytes16(&buf, 0, Endian::Little), input);
    }

    #[test]
    fn bytes16_big_endian_reverses() {
        let input: [u8; 16] = std::array::from_fn(|i| i as u8);
        let mut buf = [0u8; 16];
        write_bytes16(&mut buf, 0, &input, Endian::Big);
        let mut expected = input;
        expected.reverse();
        assert_eq!(buf, expected);
        assert_eq!(read_bytes16(&buf, 0, Endian::Big), input);
    }

    #[test]
    fn f64_round_trip() {
        let mut buf = [0u8; 8];
        write_f64_bits(&mut buf, 0, 2.7182818284, Endian::Little);
        assert_eq!(read_f64_bits(&buf, 0, Endian::Little), 2.7182818284);
    }
}
