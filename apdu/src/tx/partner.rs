// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Partner credential APDUs

use encdec::Encode;

use crate::{exchange_apdu, helpers::raw, ApduError, ExchangeKind, Instruction, RateKind};

/// Load the exchange partner credentials
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /               PARTNER_NAME_AND_PUBLIC_KEY                     /
/// /           (variable length, pre-formatted by caller)          /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct SetPartnerKeyReq<'a> {
    pub kind: ExchangeKind,
    pub rate: RateKind,
    /// Partner name and public key
    pub partner: &'a [u8],
}

exchange_apdu!(SetPartnerKeyReq<'a>, Instruction::SetPartnerKey);

impl<'a> SetPartnerKeyReq<'a> {
    /// Create a new [SetPartnerKeyReq] APDU
    pub fn new(kind: ExchangeKind, rate: RateKind, partner: &'a [u8]) -> Self {
        Self {
            kind,
            rate,
            partner,
        }
    }
}

impl<'a> Encode for SetPartnerKeyReq<'a> {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        raw::enc(self.partner, buff)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        raw::enc_len(self.partner)
    }
}

/// Check the signature over the partner credentials
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                      PARTNER_SIGNATURE                        /
/// /                      (variable length)                        /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct CheckPartnerReq<'a> {
    pub kind: ExchangeKind,
    pub rate: RateKind,
    /// Signature over partner credentials
    pub signature: &'a [u8],
}

exchange_apdu!(CheckPartnerReq<'a>, Instruction::CheckPartner);

impl<'a> CheckPartnerReq<'a> {
    /// Create a new [CheckPartnerReq] APDU
    pub fn new(kind: ExchangeKind, rate: RateKind, signature: &'a [u8]) -> Self {
        Self {
            kind,
            rate,
            signature,
        }
    }
}

impl<'a> Encode for CheckPartnerReq<'a> {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        raw::enc(self.signature, buff)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        raw::enc_len(self.signature)
    }
}
