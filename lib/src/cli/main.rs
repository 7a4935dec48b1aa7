// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Command line utility for encoding exchange steps against a dry-run device

use clap::{Parser, Subcommand};
use log::{debug, error, info, LevelFilter};

use ledger_exchange::{
    apdu::{ExchangeKind, Fee, RateKind},
    Channel, Error, ExchangeSession,
};

mod helpers;
use helpers::*;

/// Exchange command line utility
#[derive(Clone, PartialEq, Debug, Parser)]
struct Options {
    /// Exchange kind (swap / sell)
    #[clap(long, default_value = "swap", value_parser = parse_kind)]
    kind: ExchangeKind,

    /// Partner rate kind (fixed / floating)
    #[clap(long, default_value = "fixed", value_parser = parse_rate)]
    rate: RateKind,

    /// Hex encoded device response (body and status) returned by the dry-run channel
    #[clap(long, default_value = "9000")]
    response: HexData,

    /// Subcommand to execute
    #[clap(subcommand)]
    cmd: Actions,

    /// Enable verbose logging
    #[clap(long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Clone, PartialEq, Debug, Subcommand)]
#[non_exhaustive]
enum Actions {
    /// Start a new transaction
    StartNewTransaction,

    /// Load partner name and public key
    SetPartnerKey {
        /// Hex encoded partner name and public key
        #[clap(long)]
        partner: HexData,
    },

    /// Check the partner credentials signature
    CheckPartner {
        /// Hex encoded signature over partner credentials
        #[clap(long)]
        signature: HexData,
    },

    /// Load the partner transaction and fee
    ProcessTransaction {
        /// Hex encoded partner transaction
        #[clap(long)]
        transaction: HexData,

        /// Transaction fee (decimal)
        #[clap(long, value_parser = parse_fee)]
        fee: Fee,
    },

    /// Check the partner signature over the transaction
    CheckTransactionSignature {
        /// Hex encoded transaction signature
        #[clap(long)]
        signature: HexData,
    },

    /// Check the payout address (asset in for sell transactions)
    CheckPayoutAddress {
        /// Hex encoded payout currency configuration
        #[clap(long)]
        config: HexData,

        /// Hex encoded DER signature over the currency configuration
        #[clap(long)]
        config_signature: HexData,

        /// Hex encoded address parameters
        #[clap(long)]
        address_params: HexData,
    },

    /// Check the refund address (swap only)
    CheckRefundAddress {
        /// Hex encoded refund currency configuration
        #[clap(long)]
        config: HexData,

        /// Hex encoded DER signature over the currency configuration
        #[clap(long)]
        config_signature: HexData,

        /// Hex encoded address parameters
        #[clap(long)]
        address_params: HexData,
    },

    /// Sign the coin transaction
    SignCoinTransaction,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Options::parse();

    // Setup logging
    simplelog::SimpleLogger::init(args.log_level, simplelog::Config::default())?;

    debug!("Using kind: {} rate: {}", args.kind, args.rate);

    let c = DryRun {
        response: args.response.0.clone(),
    };
    let mut s = ExchangeSession::new(c, args.kind).with_rate(args.rate);

    // Execute command
    if let Err(e) = execute(&mut s, args.cmd).await {
        match e.status() {
            Some(status) => error!("Device rejected request: {}", status),
            None => error!("Request failed: {}", e),
        }
        return Err(e.into());
    }

    Ok(())
}

/// Execute a command with the provided session
async fn execute<C>(s: &mut ExchangeSession<C>, cmd: Actions) -> Result<(), Error<C::Error>>
where
    C: Channel + Send,
{
    debug!("Executing command: {:?}", cmd);

    match cmd {
        Actions::StartNewTransaction => {
            let id = s.start_new_transaction().await?;

            info!("transaction id: {}", id);
        }
        Actions::SetPartnerKey { partner } => {
            s.set_partner_key(partner.as_ref()).await?;
        }
        Actions::CheckPartner { signature } => {
            s.check_partner(signature.as_ref()).await?;
        }
        Actions::ProcessTransaction { transaction, fee } => {
            info!("fee: {} (0x{})", fee, fee.to_hex());

            s.process_transaction(transaction.as_ref(), &fee).await?;
        }
        Actions::CheckTransactionSignature { signature } => {
            s.check_transaction_signature(signature.as_ref()).await?;
        }
        Actions::CheckPayoutAddress {
            config,
            config_signature,
            address_params,
        } => {
            s.check_payout_address(
                config.as_ref(),
                config_signature.as_ref(),
                address_params.as_ref(),
            )
            .await?;
        }
        Actions::CheckRefundAddress {
            config,
            config_signature,
            address_params,
        } => {
            s.check_refund_address(
                config.as_ref(),
                config_signature.as_ref(),
                address_params.as_ref(),
            )
            .await?;
        }
        Actions::SignCoinTransaction => {
            s.sign_coin_transaction().await?;
        }
    }

    info!("ok");

    Ok(())
}
