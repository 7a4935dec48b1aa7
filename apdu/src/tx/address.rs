// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Payout / refund address APDUs

use encdec::Encode;

use crate::{
    exchange_apdu,
    helpers::{lv, raw},
    input::{check_field, check_signature},
    ApduError, ApduStatic, ExchangeKind, InputError, Instruction, RateKind, EXCHANGE_APDU_CLA,
};

/// Signed currency configuration and address derivation parameters,
/// shared by payout and refund address checks
///
/// ## Encoding:
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |   CONFIG_LEN  |                                               |
/// +-+-+-+-+-+-+-+-+                                               +
/// /                       CURRENCY_CONFIG                         /
/// /                    (variable length, <= 255)                  /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |                                                               |
/// /                   CURRENCY_CONFIG_SIGNATURE                   /
/// /                   (DER encoded, 70..=73 bytes)                /
/// |                                                               |
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// |  PARAMS_LEN   |                                               |
/// +-+-+-+-+-+-+-+-+                                               +
/// /                      ADDRESS_PARAMETERS                       /
/// /                    (variable length, <= 255)                  /
/// +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct CurrencyAddress<'a> {
    config: &'a [u8],
    signature: &'a [u8],
    params: &'a [u8],
}

impl<'a> CurrencyAddress<'a> {
    /// Create a new [CurrencyAddress], checking field lengths
    pub fn new(
        config: &'a [u8],
        signature: &'a [u8],
        params: &'a [u8],
    ) -> Result<Self, InputError> {
        check_field("currency config", config)?;
        check_field("address parameters", params)?;
        check_signature(signature)?;

        Ok(Self {
            config,
            signature,
            params,
        })
    }
}

impl<'a> Encode for CurrencyAddress<'a> {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        let mut index = 0;

        index += lv::enc(self.config, &mut buff[index..])?;
        index += raw::enc(self.signature, &mut buff[index..])?;
        index += lv::enc(self.params, &mut buff[index..])?;

        Ok(index)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        Ok(lv::enc_len(self.config)? + raw::enc_len(self.signature)? + lv::enc_len(self.params)?)
    }
}

/// Check the payout address, or the asset in for sell transactions
#[derive(Clone, PartialEq, Debug)]
pub struct CheckPayoutAddressReq<'a> {
    pub kind: ExchangeKind,
    pub rate: RateKind,
    pub address: CurrencyAddress<'a>,
}

exchange_apdu!(CheckPayoutAddressReq<'a>, Instruction::CheckPayoutAddress);

impl<'a> CheckPayoutAddressReq<'a> {
    /// Create a new [CheckPayoutAddressReq] APDU
    pub fn new(kind: ExchangeKind, rate: RateKind, address: CurrencyAddress<'a>) -> Self {
        Self {
            kind,
            rate,
            address,
        }
    }
}

impl<'a> Encode for CheckPayoutAddressReq<'a> {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        self.address.encode(buff)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        self.address.encode_len()
    }
}

/// Check the refund address.
///
/// Refunds only apply to swap transactions, so P2 is always zero.
#[derive(Clone, PartialEq, Debug)]
pub struct CheckRefundAddressReq<'a> {
    pub rate: RateKind,
    pub address: CurrencyAddress<'a>,
}

impl<'a> ApduStatic for CheckRefundAddressReq<'a> {
    const CLA: u8 = EXCHANGE_APDU_CLA;
    const INS: u8 = Instruction::CheckRefundAddress as u8;

    fn p1(&self) -> u8 {
        self.rate as u8
    }

    fn p2(&self) -> u8 {
        0x00
    }
}

impl<'a> CheckRefundAddressReq<'a> {
    /// Create a new [CheckRefundAddressReq] APDU
    pub fn new(rate: RateKind, address: CurrencyAddress<'a>) -> Self {
        Self { rate, address }
    }
}

impl<'a> Encode for CheckRefundAddressReq<'a> {
    type Error = ApduError;

    fn encode(&self, buff: &mut [u8]) -> Result<usize, ApduError> {
        self.address.encode(buff)
    }

    fn encode_len(&self) -> Result<usize, ApduError> {
        self.address.encode_len()
    }
}

#[cfg(test)]
mod test {
    use rand::random;

    use super::*;
    use crate::test::encode_apdu;

    #[test]
    fn encode_payout_address() {
        let config: [u8; 40] = core::array::from_fn(|_| random());
        let signature: [u8; 71] = core::array::from_fn(|_| random());
        let params: [u8; 5] = [0x05, 0x80, 0x00, 0x00, 0x2c];

        let address = CurrencyAddress::new(&config, &signature, &params).unwrap();
        let (h, d) = encode_apdu(&CheckPayoutAddressReq::new(
            ExchangeKind::Sell,
            RateKind::Fixed,
            address,
        ));

        assert_eq!((h.cla, h.ins, h.p1, h.p2), (0xe0, 0x08, 0x00, 0x01));
        assert_eq!(d.len(), 1 + 40 + 71 + 1 + 5);

        assert_eq!(d[0], 40);
        assert_eq!(&d[1..41], &config[..]);
        assert_eq!(&d[41..112], &signature[..]);
        assert_eq!(d[112], 5);
        assert_eq!(&d[113..], &params[..]);
    }

    #[test]
    fn encode_refund_address() {
        let config = [0x03, b'B', b'T', b'C'];
        let signature = [0x30u8; 70];
        let params: [u8; 0] = [];

        let address = CurrencyAddress::new(&config, &signature, &params).unwrap();
        let (h, d) = encode_apdu(&CheckRefundAddressReq::new(RateKind::Floating, address));

        assert_eq!((h.cla, h.ins, h.p1, h.p2), (0xe0, 0x09, 0x01, 0x00));
        assert_eq!(&d[..5], &[4, 0x03, b'B', b'T', b'C']);
        assert_eq!(&d[5..75], &signature[..]);
        assert_eq!(&d[75..], &[0]);
    }

    #[test]
    fn signature_length_bounds() {
        let sig = [0u8; 80];

        for n in [70, 73] {
            assert!(CurrencyAddress::new(&[], &sig[..n], &[]).is_ok(), "length {n}");
        }

        for n in [69, 74] {
            assert_eq!(
                CurrencyAddress::new(&[], &sig[..n], &[]),
                Err(InputError::SignatureLength(n))
            );
        }
    }

    #[test]
    fn field_length_bounds() {
        let sig = [0u8; 72];
        let long = [0u8; 256];

        assert!(CurrencyAddress::new(&long[..255], &sig, &long[..255]).is_ok());

        assert_eq!(
            CurrencyAddress::new(&long, &sig, &[]),
            Err(InputError::FieldTooLong {
                field: "currency config",
                len: 256
            })
        );
        assert_eq!(
            CurrencyAddress::new(&[], &sig, &long),
            Err(InputError::FieldTooLong {
                field: "address parameters",
                len: 256
            })
        );
    }
}
