// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Exchange and rate kinds, selecting how commands are interpreted by the device

use num_enum::TryFromPrimitive;
use strum::{Display, EnumIter, EnumString, EnumVariantNames};

/// Exchange kind, sent as P2 to select the device-side interpretation
/// of each command and used to decode responses.
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    EnumString,
    Display,
    EnumVariantNames,
    EnumIter,
    TryFromPrimitive,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum ExchangeKind {
    /// Swap one coin for another
    Swap = 0x00,
    /// Sell a coin for fiat
    Sell = 0x01,
}

/// Rate kind quoted by the exchange partner, sent as P1
#[derive(
    Copy,
    Clone,
    PartialEq,
    Eq,
    Debug,
    Default,
    EnumString,
    Display,
    EnumVariantNames,
    EnumIter,
    TryFromPrimitive,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum RateKind {
    #[default]
    Fixed = 0x00,
    Floating = 0x01,
}

#[cfg(test)]
mod test {
    use core::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn exchange_kind_values() {
        assert_eq!(ExchangeKind::Swap as u8, 0x00);
        assert_eq!(ExchangeKind::Sell as u8, 0x01);

        for k in ExchangeKind::iter() {
            assert_eq!(ExchangeKind::try_from(k as u8).ok(), Some(k));
        }

        assert!(ExchangeKind::try_from(0x02).is_err());
    }

    #[test]
    fn exchange_kind_names() {
        assert_eq!(ExchangeKind::from_str("swap"), Ok(ExchangeKind::Swap));
        assert_eq!(ExchangeKind::from_str("sell"), Ok(ExchangeKind::Sell));
        assert!(ExchangeKind::from_str("fund").is_err());
    }

    #[test]
    fn rate_kind_default_fixed() {
        assert_eq!(RateKind::default(), RateKind::Fixed);
        assert_eq!(RateKind::default() as u8, 0x00);
        assert_eq!(RateKind::from_str("floating"), Ok(RateKind::Floating));
    }
}
