// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Exchange session, driving the swap / sell handshake
//!
//! Each step encodes a request, sends it via the session [Channel] and checks
//! the response status. Steps are independent, the device enforces ordering.

use encdec::Encode;
use log::{debug, warn};

use ledger_exchange_apdu::{
    header,
    tx::{
        CheckPartnerReq, CheckPayoutAddressReq, CheckRefundAddressReq,
        CheckTransactionSignatureReq, CurrencyAddress, ProcessTransactionReq, SetPartnerKeyReq,
        SignCoinTransactionReq, StartNewTransactionReq, TransactionId,
    },
    split_status, ApduError, ApduStatic, ExchangeKind, Fee, RateKind, Status, ACCEPTED_STATUS,
};

use crate::{Channel, Error};

/// Exchange handle for a [Channel] to a device running the exchange application.
///
/// Steps must be called in order, one at a time:
/// [start_new_transaction](Self::start_new_transaction),
/// [set_partner_key](Self::set_partner_key),
/// [check_partner](Self::check_partner),
/// [process_transaction](Self::process_transaction),
/// [check_transaction_signature](Self::check_transaction_signature),
/// [check_payout_address](Self::check_payout_address),
/// [check_refund_address](Self::check_refund_address) (swap only),
/// [sign_coin_transaction](Self::sign_coin_transaction).
pub struct ExchangeSession<C: Channel> {
    /// Channel for device communication
    c: C,
    /// Exchange kind, fixed for the session
    kind: ExchangeKind,
    /// Partner rate kind
    rate: RateKind,
}

impl<C: Channel + Send> ExchangeSession<C> {
    /// Create a new session with the default (fixed) rate
    pub fn new(c: C, kind: ExchangeKind) -> Self {
        Self {
            c,
            kind,
            rate: RateKind::default(),
        }
    }

    /// Set the rate kind for the session
    pub fn with_rate(mut self, rate: RateKind) -> Self {
        self.rate = rate;
        self
    }

    pub fn kind(&self) -> ExchangeKind {
        self.kind
    }

    pub fn rate(&self) -> RateKind {
        self.rate
    }

    /// Release the underlying channel
    pub fn into_inner(self) -> C {
        self.c
    }

    /// Start a new transaction, returning the device transaction id
    /// (swap) or payout address identifier (sell)
    pub async fn start_new_transaction(&mut self) -> Result<TransactionId, Error<C::Error>> {
        debug!("Starting {} transaction", self.kind);

        let req = StartNewTransactionReq::new(self.kind, self.rate);
        let body = self.request(req).await?;

        let id = TransactionId::decode(self.kind, &body)?;

        debug!("Transaction id: {}", id);

        Ok(id)
    }

    /// Load partner name and public key (pre-formatted by the caller)
    pub async fn set_partner_key(&mut self, partner: &[u8]) -> Result<(), Error<C::Error>> {
        debug!("Setting partner key");

        let req = SetPartnerKeyReq::new(self.kind, self.rate, partner);
        self.request(req).await?;

        Ok(())
    }

    /// Check the signature over partner credentials
    pub async fn check_partner(&mut self, signature: &[u8]) -> Result<(), Error<C::Error>> {
        debug!("Checking partner");

        let req = CheckPartnerReq::new(self.kind, self.rate, signature);
        self.request(req).await?;

        Ok(())
    }

    /// Load the partner transaction and fee
    pub async fn process_transaction(
        &mut self,
        transaction: &[u8],
        fee: &Fee,
    ) -> Result<(), Error<C::Error>> {
        debug!(
            "Processing transaction ({} bytes, fee: {})",
            transaction.len(),
            fee
        );

        let req = ProcessTransactionReq::new(self.kind, self.rate, transaction, fee)?;
        self.request(req).await?;

        Ok(())
    }

    /// Check the partner signature over the transaction
    pub async fn check_transaction_signature(
        &mut self,
        signature: &[u8],
    ) -> Result<(), Error<C::Error>> {
        debug!("Checking transaction signature");

        let req = CheckTransactionSignatureReq::new(self.kind, self.rate, signature);
        self.request(req).await?;

        Ok(())
    }

    /// Check the payout address using the signed payout currency configuration
    pub async fn check_payout_address(
        &mut self,
        config: &[u8],
        config_signature: &[u8],
        address_params: &[u8],
    ) -> Result<(), Error<C::Error>> {
        debug!("Checking payout address");

        let address = CurrencyAddress::new(config, config_signature, address_params)?;
        let req = CheckPayoutAddressReq::new(self.kind, self.rate, address);
        self.request(req).await?;

        Ok(())
    }

    /// Check the asset in for sell transactions (shares the payout address command)
    pub async fn check_asset_in(
        &mut self,
        config: &[u8],
        config_signature: &[u8],
        address_params: &[u8],
    ) -> Result<(), Error<C::Error>> {
        self.check_payout_address(config, config_signature, address_params)
            .await
    }

    /// Check the refund address using the signed refund currency configuration.
    ///
    /// Refunds only apply to swap transactions, callers must not use this for sell
    /// transactions (this is not enforced).
    pub async fn check_refund_address(
        &mut self,
        config: &[u8],
        config_signature: &[u8],
        address_params: &[u8],
    ) -> Result<(), Error<C::Error>> {
        if self.kind == ExchangeKind::Sell {
            warn!("Refund address check is unused for sell transactions");
        }

        debug!("Checking refund address");

        let address = CurrencyAddress::new(config, config_signature, address_params)?;
        let req = CheckRefundAddressReq::new(self.rate, address);
        self.request(req).await?;

        Ok(())
    }

    /// Sign the coin transaction, completing the exchange
    pub async fn sign_coin_transaction(&mut self) -> Result<(), Error<C::Error>> {
        debug!("Signing coin transaction");

        let req = SignCoinTransactionReq::new(self.kind, self.rate);
        self.request(req).await?;

        Ok(())
    }

    /// Helper to encode and send a request, returning the response body
    /// on success
    async fn request<R>(&mut self, req: R) -> Result<Vec<u8>, Error<C::Error>>
    where
        R: Encode<Error = ApduError> + ApduStatic,
    {
        // Encode request
        let h = header(&req);
        let mut buff = vec![0u8; req.encode_len()?];
        let n = req.encode(&mut buff)?;
        buff.truncate(n);

        debug!(
            "Request: {:02x} {:02x} {:02x} {:02x} {}",
            h.cla,
            h.ins,
            h.p1,
            h.p2,
            hex::encode(&buff)
        );

        // Issue request
        let resp = self
            .c
            .send(h, &buff, &ACCEPTED_STATUS)
            .await
            .map_err(Error::Transport)?;

        // Check response status
        let (body, status) = split_status(&resp)?;

        debug!("Response: {} ({} bytes)", Status::from(status), body.len());

        match Status::from(status) {
            Status::Success => Ok(body.to_vec()),
            _ => Err(Error::DeviceRejected(status)),
        }
    }
}
