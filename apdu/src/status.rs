// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Device status codes and response handling
//!
//! Every response ends with a big-endian 16-bit status code. The device only
//! answers with [StatusCode::Ok] or one of the rejection codes in
//! [ACCEPTED_STATUS], anything else is a protocol violation.

use byteorder::{BigEndian, ByteOrder};
use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter};

/// Status codes expected from the exchange application
#[derive(Copy, Clone, PartialEq, Eq, Debug, Display, EnumIter, TryFromPrimitive)]
#[repr(u16)]
pub enum StatusCode {
    Ok = 0x9000,
    IncorrectCommandData = 0x6a80,
    DeserializationFailed = 0x6a81,
    WrongTransactionId = 0x6a82,
    InvalidAddress = 0x6a83,
    UserRefused = 0x6a84,
    InternalError = 0x6a85,
    ClassNotSupported = 0x6e00,
    InvalidInstruction = 0x6d00,
    SignVerificationFail = 0x9d1a,
}

/// Status codes the transport should treat as expected (non-fatal) answers
pub const ACCEPTED_STATUS: [StatusCode; 10] = [
    StatusCode::Ok,
    StatusCode::IncorrectCommandData,
    StatusCode::DeserializationFailed,
    StatusCode::WrongTransactionId,
    StatusCode::InvalidAddress,
    StatusCode::UserRefused,
    StatusCode::InternalError,
    StatusCode::ClassNotSupported,
    StatusCode::InvalidInstruction,
    StatusCode::SignVerificationFail,
];

/// Classification of a raw status code
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Status {
    /// Command succeeded
    Success,
    /// Command rejected with a documented code
    Rejected(StatusCode),
    /// Code outside of [ACCEPTED_STATUS]
    Unknown(u16),
}

impl Status {
    /// Fetch the raw status code
    pub fn code(&self) -> u16 {
        match self {
            Status::Success => StatusCode::Ok as u16,
            Status::Rejected(c) => *c as u16,
            Status::Unknown(c) => *c,
        }
    }

    /// Check whether the status signals success
    pub fn is_success(&self) -> bool {
        matches!(self, Status::Success)
    }
}

impl From<u16> for Status {
    fn from(code: u16) -> Self {
        match StatusCode::try_from(code) {
            Ok(StatusCode::Ok) => Status::Success,
            Ok(c) => Status::Rejected(c),
            Err(_) => Status::Unknown(code),
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Status::Success => write!(f, "Ok (0x9000)"),
            Status::Rejected(c) => write!(f, "{} (0x{:04x})", c, *c as u16),
            Status::Unknown(c) => write!(f, "Unknown (0x{c:04x})"),
        }
    }
}

/// Malformed response errors
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ResponseError {
    /// Response too short to contain a status code
    Short(usize),
    /// Response body shorter than the step-specific payload
    Truncated { expected: usize, actual: usize },
}

impl core::fmt::Display for ResponseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ResponseError::Short(n) => write!(f, "response too short for status ({n} bytes)"),
            ResponseError::Truncated { expected, actual } => write!(
                f,
                "response body truncated (expected {expected} bytes, got {actual})"
            ),
        }
    }
}

/// Split a raw response into body and trailing status code
pub fn split_status(resp: &[u8]) -> Result<(&[u8], u16), ResponseError> {
    if resp.len() < 2 {
        return Err(ResponseError::Short(resp.len()));
    }

    let (body, status) = resp.split_at(resp.len() - 2);

    Ok((body, BigEndian::read_u16(status)))
}

#[cfg(test)]
mod test {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn accepted_status_covers_all_codes() {
        assert_eq!(ACCEPTED_STATUS.len(), StatusCode::iter().count());

        for c in StatusCode::iter() {
            assert!(ACCEPTED_STATUS.contains(&c), "missing status {c}");
        }
    }

    #[test]
    fn classify_status() {
        assert_eq!(Status::from(0x9000), Status::Success);
        assert_eq!(
            Status::from(0x6a80),
            Status::Rejected(StatusCode::IncorrectCommandData)
        );
        assert_eq!(
            Status::from(0x6a84),
            Status::Rejected(StatusCode::UserRefused)
        );
        assert_eq!(
            Status::from(0x9d1a),
            Status::Rejected(StatusCode::SignVerificationFail)
        );
        assert_eq!(Status::from(0x6985), Status::Unknown(0x6985));

        for c in [0x9000, 0x6a80, 0x6d00, 0x1234] {
            assert_eq!(Status::from(c).code(), c);
        }
    }

    #[test]
    fn split_short_responses() {
        assert_eq!(split_status(&[]), Err(ResponseError::Short(0)));
        assert_eq!(split_status(&[0x90]), Err(ResponseError::Short(1)));
    }

    #[test]
    fn split_status_only() {
        let (body, status) = split_status(&[0x90, 0x00]).unwrap();
        assert!(body.is_empty());
        assert_eq!(status, 0x9000);
    }

    #[test]
    fn split_body_and_status() {
        let (body, status) = split_status(&[0x01, 0x02, 0x03, 0x6a, 0x80]).unwrap();
        assert_eq!(body, &[0x01, 0x02, 0x03]);
        assert_eq!(status, 0x6a80);
        assert_ne!(Status::from(status), Status::Success);
    }
}
