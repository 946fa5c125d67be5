//! Fixed-width binary pack/unpack of scalar values under a compact,
//! `struct`-style format string.
//!
//! ```
//! use bufpack::{pack, unpack, FieldValue};
//!
//! let mut buf = [0u8; 2];
//! pack(&mut buf, "<H", &[FieldValue::U16(0x1234)]).unwrap();
//! assert_eq!(buf, [0x34, 0x12]);
//!
//! let mut out = [FieldValue::U16(0)];
//! unpack(&buf, "<H", &mut out).unwrap();
//! assert_eq!(out[0], FieldValue::U16(0x1234));
//! ```
//!
//! See the [format string grammar](format) for the directive alphabet, and
//! [`Error`] for the failure modes of [`pack`], [`unpack`], and [`locate`].

pub mod codec;
pub mod cursor;
pub mod error;
pub mod format;
pub mod half;
pub mod value;

pub use cursor::{locate, pack, unpack, FieldLocation};
pub use error::Error;
pub use format::Endian;
pub use value::FieldValue;
