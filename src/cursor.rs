//! Cursor / dispatch driver: `pack`, `unpack`, and `locate`.
//!
//! Each operation threads an explicit `(offset, endian)` cursor through the
//! directive stream from [`crate::format::Directives`], bounds-checking
//! every directive against the buffer length before touching it.

use crate::codec;
use crate::error::Error;
use crate::format::{Directive, Directives, Endian, FieldCode};
use crate::value::FieldValue;

/// The location of a decoded field within a buffer, as returned by
/// [`locate`]. Not a raw pointer — callers slice the buffer themselves:
/// `&buf[loc.offset..loc.offset + loc.width]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLocation {
    pub offset: usize,
    pub width: usize,
}

/// Pack `values` into `buf` under the control of `format`.
///
/// Returns the one-past-the-end offset of the last byte written. Fields
/// consume `values` in order; padding and endianness markers do not. Fails
/// with [`Error::ValueCountMismatch`] if `values` has a different length
/// than the format string's field count, with [`Error::TypeMismatch`] if a
/// value's variant doesn't match its field's code, and with
/// [`Error::BufferOverflow`] if any directive would run past `buf.len()`.
///
/// On failure some bytes may already have been written; treat `buf` as
/// indeterminate (spec.md §4.3 "Failure semantics").
pub fn pack(buf: &mut [u8], format: &str, values: &[FieldValue]) -> Result<usize, Error> {
    let field_count = count_fields(format)?;
    if values.len() != field_count {
        return Err(Error::ValueCountMismatch { expected: field_count, got: values.len() });
    }

    let mut offset = 0usize;
    let mut endian = Endian::default();
    let mut field_index = 0usize;

    for directive in Directives::new(format) {
        match directive? {
            Directive::Endian(e) => endian = e,
            Directive::Pad(n) => {
                check_bounds(offset, n, buf.len())?;
                offset += n;
            }
            Directive::Field(code) => {
                check_bounds(offset, code.width(), buf.len())?;
                let value = &values[field_index];
                if !value.matches(code) {
                    return Err(Error::TypeMismatch {
                        field_index,
                        code: code.as_char(),
                        expected: FieldValue::expected_name(code),
                    });
                }
                encode_field(buf, offset, code, value, endian);
                offset += code.width();
                field_index += 1;
            }
        }
    }

    Ok(offset)
}

/// Unpack `buf` into `out` under the control of `format`.
///
/// Symmetric to [`pack`]: each slot in `out` declares, via its variant on
/// entry, the expected type of the corresponding field, and is overwritten
/// with the decoded value. Padding is skipped without touching `out`.
/// Returns the one-past-the-end offset consumed.
pub fn unpack(buf: &[u8], format: &str, out: &mut [FieldValue]) -> Result<usize, Error> {
    let field_count = count_fields(format)?;
    if out.len() != field_count {
        return Err(Error::ValueCountMismatch { expected: field_count, got: out.len() });
    }

    let mut offset = 0usize;
    let mut endian = Endian::default();
    let mut field_index = 0usize;

    for directive in Directives::new(format) {
        match directive? {
            Directive::Endian(e) => endian = e,
            Directive::Pad(n) => {
                check_bounds(offset, n, buf.len())?;
                offset += n;
            }
            Directive::Field(code) => {
                check_bounds(offset, code.width(), buf.len())?;
                let slot = &mut out[field_index];
                if !slot.matches(code) {
                    return Err(Error::TypeMismatch {
                        field_index,
                        code: code.as_char(),
                        expected: FieldValue::expected_name(code),
                    });
                }
                *slot = decode_field(buf, offset, code, endian);
                offset += code.width();
                field_index += 1;
            }
        }
    }

    Ok(offset)
}

/// Locate the `field_index`-th field (0-based, counting only width>0
/// non-padding directives) without touching any buffer contents.
///
/// Fails with [`Error::IndexOutOfRange`] if the format has fewer than
/// `field_index + 1` fields, or with [`Error::BufferOverflow`] if reaching
/// that field would require bytes past `buf_len`.
pub fn locate(buf_len: usize, format: &str, field_index: usize) -> Result<FieldLocation, Error> {
    let mut offset = 0usize;
    let mut seen = 0usize;

    for directive in Directives::new(format) {
        match directive? {
            Directive::Endian(_) => {}
            Directive::Pad(n) => {
                check_bounds(offset, n, buf_len)?;
                offset += n;
            }
            Directive::Field(code) => {
                check_bounds(offset, code.width(), buf_len)?;
                if seen == field_index {
                    return Ok(FieldLocation { offset, width: code.width() });
                }
                offset += code.width();
                seen += 1;
            }
        }
    }

    Err(Error::IndexOutOfRange { field_index, field_count: seen })
}

/// Count the field (non-padding, non-endianness) directives in `format`,
/// surfacing the first parse error encountered.
fn count_fields(format: &str) -> Result<usize, Error> {
    let mut n = 0;
    for directive in Directives::new(format) {
        if let Directive::Field(_) = directive? {
            n += 1;
        }
    }
    Ok(n)
}

fn check_bounds(offset: usize, width: usize, buf_len: usize) -> Result<(), Error> {
    let need = offset.checked_add(width).ok_or(Error::BufferOverflow {
        need: usize::MAX,
        have: buf_len,
        pos: offset,
    })?;
    if need > buf_len {
        return Err(Error::BufferOverflow { need, have: buf_len, pos: offset });
    }
    Ok(())
}

fn encode_field(buf: &mut [u8], offset: usize, code: FieldCode, value: &FieldValue, endian: Endian) {
    match (code, value) {
        (FieldCode::I8, FieldValue::I8(v)) => codec::write_i8(buf, offset, *v, endian),
        (FieldCode::U8, FieldValue::U8(v)) => codec::write_u8(buf, offset, *v, endian),
        (FieldCode::I16, FieldValue::I16(v)) => codec::write_i16(buf, offset, *v, endian),
        (FieldCode::U16, FieldValue::U16(v)) => codec::write_u16(buf, offset, *v, endian),
        (FieldCode::I32, FieldValue::I32(v)) => codec::write_i32(buf, offset, *v, endian),
        (FieldCode::U32, FieldValue::U32(v)) => codec::write_u32(buf, offset, *v, endian),
        (FieldCode::I64, FieldValue::I64(v)) => codec::write_i64(buf, offset, *v, endian),
        (FieldCode::U64, FieldValue::U64(v)) => codec::write_u64(buf, offset, *v, endian),
        (FieldCode::F16, FieldValue::F16(v)) => codec::write_f16(buf, offset, *v, endian),
        (FieldCode::F32, FieldValue::F32(v)) => codec::write_f32_bits(buf, offset, *v, endian),
        (FieldCode::F64, FieldValue::F64(v)) => codec::write_f64_bits(buf, offset, *v, endian),
        (FieldCode::I128, FieldValue::Bytes16(v)) | (FieldCode::U128, FieldValue::Bytes16(v)) => {
            codec::write_bytes16(buf, offset, v, endian)
        }
        // Unreachable: callers check `value.matches(code)` before calling.
        _ => unreachable!("encode_field called with mismatched code/value"),
    }
}

fn decode_field(buf: &[u8], offset: usize, code: FieldCode, endian: Endian) -> FieldValue {
    match code {
        FieldCode::I8 => FieldValue::I8(codec::read_i8(buf, offset, endian)),
        FieldCode::U8 => FieldValue::U8(codec::read_u8(buf, offset, endian)),
        FieldCode::I16 => FieldValue::I16(codec::read_i16(buf, offset, endian)),
        FieldCode::U16 => FieldValue::U16(codec::read_u16(buf, offset, endian)),
        FieldCode::I32 => FieldValue::I32(codec::read_i32(buf, offset, endian)),
        FieldCode::U32 => FieldValue::U32(codec::read_u32(buf, offset, endian)),
        FieldCode::I64 => FieldValue::I64(codec::read_i64(buf, offset, endian)),
        FieldCode::U64 => FieldValue::U64(codec::read_u64(buf, offset, endian)),
        FieldCode::F16 => FieldValue::F16(codec::read_f16(buf, offset, endian)),
        FieldCode::F32 => FieldValue::F32(codec::read_f32_bits(buf, offset, endian)),
        FieldCode::F64 => FieldValue::F64(codec::read_f64_bits(buf, offset, endian)),
        FieldCode::I128 | FieldCode::U128 => FieldValue::Bytes16(codec::read_bytes16(buf, offset, endian)),
    }
}
