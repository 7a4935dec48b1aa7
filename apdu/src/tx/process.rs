// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Partner transaction APDUs

use alloc::vec::Vec;

use encdec::Encode;

use crate::{
    exchange_apdu,
    helpers::{lv, raw},
    input::check_field,
    ApduError, ExchangeKind, Fee, InputError, Instruction, RateKind,
};

/// Load the partner transaction and fee
///
/// The fee is length-prefixed separately from the transaction as its
/// encoded width varies with the amount.
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |     TX_LEN    |                                               |
/// +-+-+-+-+-+-+-+-+                                               +
/// /                          TRANSACTION                          /
/// /                    (variable length, <= 255)                  /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |    FEE_LEN    |                                               |
/// +-+-+-+-+-+-+-+-+                                               +
/// /                              FEE                              /
/// /              (minimal big-endian, variable length)            /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct ProcessTransactionReq<'a> {
    pub kind: ExchangeKind,
    pub rate: RateKind,
    /// Encoded partner transaction
    transaction: &'a [u8],
    /// Encoded fee bytes
    fee: Vec<u8>,
}

exchange_apdu!(ProcessTransactionReq<'a>, Instruction::ProcessTransaction);

impl<'a> ProcessTransactionReq<'a> {
    /// Create a new [ProcessTransactionReq] APDU, checking field lengths
    pub fn new(
        kind: ExchangeKind,
        rate: RateKind,
        transaction: &'a [u8],
        fee: &Fee,
    ) -> Result<Self, InputError> {
        let fee = fee.to_bytes();

        check_field("transaction", transaction)?;
        check_field("fee", &fee)?;

        Ok(Self {
            kind,
            rate,
            transaction,
            fee,
        })
    }

    /// Fetch the encoded transaction
    pub fn transaction(&self) -> &[u8] {
        self.transaction
    }

    /// Fetch the encoded fee
    pub fn fee(&self) -> &[u8] {
        &self.fee
    }
}

impl<'a> Encode for ProcessTransactionReq<'a> {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        let mut index = 0;

        // Write length-prefixed transaction
        index += lv::enc(self.transaction, &mut buff[index..])?;

        // Write length-prefixed fee
        index += lv::enc(&self.fee, &mut buff[index..])?;

        Ok(index)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        Ok(lv::enc_len(self.transaction)? + lv::enc_len(&self.fee)?)
    }
}

/// Check the partner signature over the transaction
#[derive(Clone, PartialEq, Debug)]
pub struct CheckTransactionSignatureReq<'a> {
    pub kind: ExchangeKind,
    pub rate: RateKind,
    /// Partner signature over the transaction
    pub signature: &'a [u8],
}

exchange_apdu!(
    CheckTransactionSignatureReq<'a>,
    Instruction::CheckTransactionSignature
);

impl<'a> CheckTransactionSignatureReq<'a> {
    /// Create a new [CheckTransactionSignatureReq] APDU
    pub fn new(kind: ExchangeKind, rate: RateKind, signature: &'a [u8]) -> Self {
        Self {
            kind,
            rate,
            signature,
        }
    }
}

impl<'a> Encode for CheckTransactionSignatureReq<'a> {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        raw::enc(self.signature, buff)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        raw::enc_len(self.signature)
    }
}
