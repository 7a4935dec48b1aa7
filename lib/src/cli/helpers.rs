// Copyright (c) 2022-2023 The MobileCoin Foundation

use std::{convert::Infallible, str::FromStr};

use async_trait::async_trait;
use log::{debug, info};

use ledger_exchange::{
    apdu::{ApduHeader, ExchangeKind, Fee, RateKind, StatusCode},
    Channel,
};

/// Variable length hex encoded argument
#[derive(Clone, PartialEq, Debug)]
pub struct HexData(pub Vec<u8>);

impl FromStr for HexData {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim_start_matches("0x");

        hex::decode(s).map(HexData)
    }
}

impl AsRef<[u8]> for HexData {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for HexData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// Dry-run [Channel], logging APDUs and answering with a fixed response
pub struct DryRun {
    pub response: Vec<u8>,
}

#[async_trait]
impl Channel for DryRun {
    type Error = Infallible;

    async fn send(
        &mut self,
        header: ApduHeader,
        data: &[u8],
        accepted: &[StatusCode],
    ) -> Result<Vec<u8>, Self::Error> {
        info!(
            "apdu: {:02x}{:02x}{:02x}{:02x}{:02x}{}",
            header.cla,
            header.ins,
            header.p1,
            header.p2,
            data.len(),
            hex::encode(data)
        );
        debug!(
            "accepted status: {:04x?}",
            accepted.iter().map(|s| *s as u16).collect::<Vec<_>>()
        );
        info!("response: {}", hex::encode(&self.response));

        Ok(self.response.clone())
    }
}

/// Parse an [ExchangeKind] argument
pub fn parse_kind(s: &str) -> Result<ExchangeKind, String> {
    ExchangeKind::from_str(s).map_err(|_| format!("invalid exchange kind '{s}' (swap, sell)"))
}

/// Parse a [RateKind] argument
pub fn parse_rate(s: &str) -> Result<RateKind, String> {
    RateKind::from_str(s).map_err(|_| format!("invalid rate kind '{s}' (fixed, floating)"))
}

/// Parse a decimal [Fee] argument
pub fn parse_fee(s: &str) -> Result<Fee, String> {
    Fee::from_str(s).map_err(|_| format!("invalid fee '{s}'"))
}
