// Copyright (c) 2022-2023 The MobileCoin Foundation

use core::fmt::Debug;
use std::fmt::Display;

use ledger_exchange_apdu::{ApduError, InputError, ResponseError, Status};

/// Ledger Exchange API Error Type
#[derive(Debug, thiserror::Error)]
pub enum Error<E: Display + Debug> {
    /// Channel / transport error
    #[error("Transport error {0}")]
    Transport(E),

    /// Invalid request input, raised prior to transmission
    #[error("Invalid input: {0}")]
    InvalidInput(InputError),

    /// Response too short or missing step-specific data
    #[error("Malformed response: {0}")]
    MalformedResponse(ResponseError),

    /// Device answered with a non-success status code
    #[error("Device rejected request (status: 0x{0:04x})")]
    DeviceRejected(u16),

    /// Request encoding failed
    #[error("APDU encoding failed: {0:?}")]
    Apdu(ApduError),
}

impl<E: Display + Debug> Error<E> {
    /// Fetch the device status classification for rejected requests
    pub fn status(&self) -> Option<Status> {
        match self {
            Error::DeviceRejected(code) => Some(Status::from(*code)),
            _ => None,
        }
    }
}

impl<E: Display + Debug> From<InputError> for Error<E> {
    fn from(e: InputError) -> Self {
        Error::InvalidInput(e)
    }
}

impl<E: Display + Debug> From<ResponseError> for Error<E> {
    fn from(e: ResponseError) -> Self {
        Error::MalformedResponse(e)
    }
}

impl<E: Display + Debug> From<ApduError> for Error<E> {
    fn from(e: ApduError) -> Self {
        Error::Apdu(e)
    }
}
