// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Ledger Exchange API Library (and CLI)
//!
//! Drives the swap / sell exchange handshake with a Ledger device over an
//! injected [Channel]. See [ExchangeSession] for the available steps.
//!

use std::fmt::{Debug, Display};

use async_trait::async_trait;

/// Re-export `ledger-exchange-apdu` for consumers
pub use ledger_exchange_apdu::{self as apdu};

use apdu::{ApduHeader, StatusCode};

mod session;
pub use session::ExchangeSession;

mod error;
pub use error::Error;

/// Request / response channel to the device.
///
/// Implementations own framing and physical transmission, and
/// serialise requests (one outstanding request per channel).
#[async_trait]
pub trait Channel {
    /// Transport error, passed through by [ExchangeSession]
    type Error: Display + Debug + Send;

    /// Send an APDU, returning the raw response (including the trailing status).
    ///
    /// `accepted` lists the status codes that are expected answers
    /// rather than transport failures.
    async fn send(
        &mut self,
        header: ApduHeader,
        data: &[u8],
        accepted: &[StatusCode],
    ) -> Result<Vec<u8>, Self::Error>;
}

/// Allow sessions to borrow a [Channel]
#[async_trait]
impl<'c, C: Channel + Send> Channel for &'c mut C {
    type Error = C::Error;

    async fn send(
        &mut self,
        header: ApduHeader,
        data: &[u8],
        accepted: &[StatusCode],
    ) -> Result<Vec<u8>, Self::Error> {
        (**self).send(header, data, accepted).await
    }
}
