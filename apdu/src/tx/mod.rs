// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Exchange transaction APDUs, one per step of the exchange handshake.
//!
//! Steps are expected in the order:
//! 1. [StartNewTransactionReq]
//! 2. [SetPartnerKeyReq]
//! 3. [CheckPartnerReq]
//! 4. [ProcessTransactionReq]
//! 5. [CheckTransactionSignatureReq]
//! 6. [CheckPayoutAddressReq]
//! 7. [CheckRefundAddressReq] (swap only)
//! 8. [SignCoinTransactionReq]
//!
//! Ordering is enforced by the device, not by these types.

use alloc::string::String;

use encdec::Encode;

use crate::{exchange_apdu, ApduError, ExchangeKind, Instruction, RateKind, ResponseError};

mod partner;
pub use partner::*;

mod process;
pub use process::*;

mod address;
pub use address::*;

/// Length of a swap transaction identifier
pub const SWAP_ID_LEN: usize = 10;

/// Length of a sell payout address identifier
pub const SELL_ID_LEN: usize = 32;

/// Start a new exchange transaction (0 length APDU)
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct StartNewTransactionReq {
    pub kind: ExchangeKind,
    pub rate: RateKind,
}

exchange_apdu!(StartNewTransactionReq, Instruction::StartNewTransaction);

impl StartNewTransactionReq {
    /// Create a new [StartNewTransactionReq] APDU
    pub fn new(kind: ExchangeKind, rate: RateKind) -> Self {
        Self { kind, rate }
    }
}

impl Encode for StartNewTransactionReq {
    type Error = ApduError;

    fn encode(&self, _buff: &mut [u8]) -> Result<usize, ApduError> {
        Ok(0)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        Ok(0)
    }
}

/// Sign the coin transaction, completing the exchange (0 length APDU)
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SignCoinTransactionReq {
    pub kind: ExchangeKind,
    pub rate: RateKind,
}

exchange_apdu!(SignCoinTransactionReq, Instruction::SignCoinTransaction);

impl SignCoinTransactionReq {
    /// Create a new [SignCoinTransactionReq] APDU
    pub fn new(kind: ExchangeKind, rate: RateKind) -> Self {
        Self { kind, rate }
    }
}

impl Encode for SignCoinTransactionReq {
    type Error = ApduError;

    fn encode(&self, _buff: &mut [u8]) -> Result<usize, ApduError> {
        Ok(0)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        Ok(0)
    }
}

/// Transaction identifier returned by [StartNewTransactionReq].
///
/// ## Encoding:
/// Swap transactions return a [SWAP_ID_LEN] byte ASCII identifier,
/// sell transactions a [SELL_ID_LEN] byte device-generated payout
/// address identifier. Trailing body bytes are ignored.
#[derive(Clone, PartialEq, Debug)]
pub enum TransactionId {
    Swap(String),
    Sell([u8; SELL_ID_LEN]),
}

impl TransactionId {
    /// Decode a transaction identifier from a response body
    pub fn decode(kind: ExchangeKind, body: &[u8]) -> Result<Self, ResponseError> {
        let expected = match kind {
            ExchangeKind::Swap => SWAP_ID_LEN,
            ExchangeKind::Sell => SELL_ID_LEN,
        };

        if body.len() < expected {
            return Err(ResponseError::Truncated {
                expected,
                actual: body.len(),
            });
        }

        let id = match kind {
            // 7-bit ASCII, high bits are discarded
            ExchangeKind::Swap => {
                Self::Swap(body[..expected].iter().map(|b| (b & 0x7f) as char).collect())
            }
            ExchangeKind::Sell => {
                let mut d = [0u8; SELL_ID_LEN];
                d.copy_from_slice(&body[..expected]);
                Self::Sell(d)
            }
        };

        Ok(id)
    }

    /// Fetch the raw identifier bytes
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Swap(s) => s.as_bytes(),
            Self::Sell(d) => &d[..],
        }
    }
}

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Swap(s) => write!(f, "{s}"),
            Self::Sell(d) => {
                for b in &d[..] {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod test {
    use rand::random;

    use super::*;
    use crate::test::encode_apdu;

    #[test]
    fn encode_start_new_transaction() {
        let (h, d) = encode_apdu(&StartNewTransactionReq::new(
            ExchangeKind::Sell,
            RateKind::Fixed,
        ));

        assert_eq!((h.cla, h.ins, h.p1, h.p2), (0xe0, 0x03, 0x00, 0x01));
        assert!(d.is_empty());
    }

    #[test]
    fn encode_sign_coin_transaction() {
        let (h, d) = encode_apdu(&SignCoinTransactionReq::new(
            ExchangeKind::Swap,
            RateKind::Floating,
        ));

        assert_eq!((h.cla, h.ins, h.p1, h.p2), (0xe0, 0x0a, 0x01, 0x00));
        assert!(d.is_empty());
    }

    #[test]
    fn decode_swap_id() {
        let mut body = [0u8; 40];
        body[..10].copy_from_slice(b"ABCDEFGHIJ");
        body[10..].iter_mut().for_each(|b| *b = random());

        let id = TransactionId::decode(ExchangeKind::Swap, &body).unwrap();
        assert_eq!(id, TransactionId::Swap("ABCDEFGHIJ".into()));
        assert_eq!(id.as_bytes(), b"ABCDEFGHIJ");
    }

    #[test]
    fn decode_sell_id() {
        let body: [u8; 40] = core::array::from_fn(|_| random());

        let id = TransactionId::decode(ExchangeKind::Sell, &body).unwrap();
        assert_eq!(id.as_bytes(), &body[..32]);
    }

    #[test]
    fn decode_truncated_id() {
        assert_eq!(
            TransactionId::decode(ExchangeKind::Swap, b"ABCDE"),
            Err(ResponseError::Truncated {
                expected: 10,
                actual: 5
            })
        );
        assert_eq!(
            TransactionId::decode(ExchangeKind::Sell, &[0u8; 31]),
            Err(ResponseError::Truncated {
                expected: 32,
                actual: 31
            })
        );
    }
}
