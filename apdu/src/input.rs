// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Request input validation, applied when building requests so invalid
//! buffers are rejected prior to any device communication

use crate::{MAX_FIELD_LEN, SIGNATURE_LEN_MAX, SIGNATURE_LEN_MIN};

/// Invalid request input
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum InputError {
    /// Length-prefixed field exceeds [MAX_FIELD_LEN]
    FieldTooLong { field: &'static str, len: usize },
    /// DER signature outside of [SIGNATURE_LEN_MIN]..=[SIGNATURE_LEN_MAX]
    SignatureLength(usize),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::FieldTooLong { field, len } => {
                write!(f, "{field} length {len} exceeds {MAX_FIELD_LEN} bytes")
            }
            InputError::SignatureLength(len) => write!(
                f,
                "signature length {len} outside {SIGNATURE_LEN_MIN}..={SIGNATURE_LEN_MAX} bytes"
            ),
        }
    }
}

/// Check a length-prefixed field fits in a single length byte
pub fn check_field(field: &'static str, d: &[u8]) -> Result<(), InputError> {
    match d.len() {
        n if n > MAX_FIELD_LEN => Err(InputError::FieldTooLong { field, len: n }),
        _ => Ok(()),
    }
}

/// Check a DER signature length
pub fn check_signature(d: &[u8]) -> Result<(), InputError> {
    match d.len() {
        SIGNATURE_LEN_MIN..=SIGNATURE_LEN_MAX => Ok(()),
        n => Err(InputError::SignatureLength(n)),
    }
}
