// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Protocol / APDU definitions for the Ledger exchange (swap / sell) application
//!
//! This module provides the command set used to drive an exchange handshake with
//! the device: one request type per step, the status codes the device may answer
//! with, and decoders for the step-specific response bodies.
//!
//! Every command uses the [EXCHANGE_APDU_CLA] class, the step [Instruction] as INS,
//! the [RateKind] as P1 and the [ExchangeKind] as P2 (refund address checks always
//! use a zero P2).
//!
//! Variable length fields are prefixed with a single length byte, so no field
//! may exceed [MAX_FIELD_LEN] bytes. DER signatures are written without a prefix
//! as their length is self-describing.
//!

#![no_std]

extern crate alloc;

pub use ledger_proto::{ApduError, ApduHeader, ApduStatic};

pub mod fee;
pub mod input;
pub mod kind;
pub mod prelude;
pub mod status;
pub mod tx;

mod helpers;

pub use fee::Fee;
pub use input::InputError;
pub use kind::{ExchangeKind, RateKind};
pub use status::{split_status, ResponseError, Status, StatusCode, ACCEPTED_STATUS};

/// Exchange APDU Class
pub const EXCHANGE_APDU_CLA: u8 = 0xe0;

/// Maximum length of a length-prefixed field
pub const MAX_FIELD_LEN: usize = u8::MAX as usize;

/// Minimum length of a DER encoded currency configuration signature
pub const SIGNATURE_LEN_MIN: usize = 70;

/// Maximum length of a DER encoded currency configuration signature
pub const SIGNATURE_LEN_MAX: usize = 73;

/// Exchange APDU instruction codes
#[derive(Copy, Clone, Debug, PartialEq, strum::Display)]
#[repr(u8)]
pub enum Instruction {
    /// Start a new exchange transaction, returning a transaction id
    StartNewTransaction = 0x03,

    /// Load partner name and public key
    SetPartnerKey = 0x04,

    /// Check the partner credentials signature
    CheckPartner = 0x05,

    /// Load the partner transaction and fee
    ProcessTransaction = 0x06,

    /// Check the partner signature over the transaction
    CheckTransactionSignature = 0x07,

    /// Check the payout address (asset in, for sell transactions)
    CheckPayoutAddress = 0x08,

    /// Check the refund address (swap transactions only)
    CheckRefundAddress = 0x09,

    /// Sign the coin transaction, completing the exchange
    SignCoinTransaction = 0x0a,
}

/// Build the [ApduHeader] for a static exchange APDU
pub fn header<R: ApduStatic>(req: &R) -> ApduHeader {
    ApduHeader {
        cla: R::CLA,
        ins: R::INS,
        p1: req.p1(),
        p2: req.p2(),
    }
}

/// Helper macro implementing [ApduStatic] for exchange requests,
/// using the rate as P1 and the exchange kind as P2
#[macro_export]
macro_rules! exchange_apdu {
    ($t:ident $(<$l:lifetime>)?, $ins:expr) => {
        impl$(<$l>)? $crate::ApduStatic for $t$(<$l>)? {
            const CLA: u8 = $crate::EXCHANGE_APDU_CLA;
            const INS: u8 = $ins as u8;

            fn p1(&self) -> u8 {
                self.rate as u8
            }

            fn p2(&self) -> u8 {
                self.kind as u8
            }
        }
    };
}
