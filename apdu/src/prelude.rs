//! Prelude to simplify downstream use of APDU objects
//!

pub use crate::{
    fee::Fee,
    input::InputError,
    kind::{ExchangeKind, RateKind},
    status::{split_status, ResponseError, Status, StatusCode, ACCEPTED_STATUS},
    tx::{
        CheckPartnerReq, CheckPayoutAddressReq, CheckRefundAddressReq,
        CheckTransactionSignatureReq, CurrencyAddress, ProcessTransactionReq, SetPartnerKeyReq,
        SignCoinTransactionReq, StartNewTransactionReq, TransactionId,
    },
    ApduHeader, Instruction, EXCHANGE_APDU_CLA,
};
