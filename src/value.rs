//! The typed value carrier that replaces the source's C variadic arguments.
//!
//! [`pack`](crate::pack) takes an ordered slice of [`FieldValue`]; one entry
//! per field directive in the format string, in order. [`unpack`](crate::unpack)
//! takes an ordered mutable slice of the same type: each slot's variant on
//! entry declares the expected type for that field, and is overwritten with
//! the decoded value in place. A field whose code doesn't match the
//! supplied slot's variant is rejected with [`Error::TypeMismatch`] rather
//! than silently reinterpreting bytes.
//!
//! [`Error::TypeMismatch`]: crate::Error::TypeMismatch

use crate::format::FieldCode;

/// One field's value, tagged by the scalar kind it carries.
///
/// `t` and `T` (signed/unsigned 128-bit opaque) share the same
/// [`FieldValue::Bytes16`] variant: both are treated as a blob with no
/// numeric interpretation (spec.md §4.2), so there is nothing for separate
/// variants to distinguish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    /// Half-precision value, surfaced as a host `f32` (spec.md §3).
    F16(f32),
    F32(f32),
    F64(f64),
    Bytes16([u8; 16]),
}

impl FieldValue {
    /// Whether this value's variant matches what `code` expects.
    pub(crate) fn matches(&self, code: FieldCode) -> bool {
        matches!(
            (self, code),
            (Self::I8(_), FieldCode::I8)
                | (Self::U8(_), FieldCode::U8)
                | (Self::I16(_), FieldCode::I16)
                | (Self::U16(_), FieldCode::U16)
                | (Self::I32(_), FieldCode::I32)
                | (Self::U32(_), FieldCode::U32)
                | (Self::I64(_), FieldCode::I64)
                | (Self::U64(_), FieldCode::U64)
                | (Self::F16(_), FieldCode::F16)
                | (Self::F32(_), FieldCode::F32)
                | (Self::F64(_), FieldCode::F64)
                | (Self::Bytes16(_), FieldCode::I128)
                | (Self::Bytes16(_), FieldCode::U128)
        )
    }

    /// Name of the variant `code` expects, for `TypeMismatch` messages.
    pub(crate) fn expected_name(code: FieldCode) -> &'static str {
        match code {
            FieldCode::I8 => "FieldValue::I8",
            FieldCode::U8 => "FieldValue::U8",
            FieldCode::I16 => "FieldValue::I16",
            FieldCode::U16 => "FieldValue::U16",
            FieldCode::I32 => "FieldValue::I32",
            FieldCode::U32 => "FieldValue::U32",
            FieldCode::I64 => "FieldValue::I64",
            FieldCode::U64 => "FieldValue::U64",
            FieldCode::F16 => "FieldValue::F16",
            FieldCode::F32 => "FieldValue::F32",
            FieldCode::F64 => "FieldValue::F64",
            FieldCode::I128 | FieldCode::U128 => "FieldValue::Bytes16",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_same_width_different_signedness() {
        assert!(FieldValue::I32(0).matches(FieldCode::I32));
        assert!(!FieldValue::I32(0).matches(FieldCode::U32));
    }

    #[test]
    fn bytes16_matches_both_128_bit_codes() {
        let v = FieldValue::Bytes16([0; 16]);
        assert!(v.matches(FieldCode::I128));
        assert!(v.matches(FieldCode::U128));
    }
}
