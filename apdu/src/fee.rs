// Copyright (c) 2022-2023 The MobileCoin Foundation

//! Transaction fee encoding
//!
//! Fees are arbitrary precision non-negative integers, written as the minimal
//! big-endian byte sequence. Zero encodes to a single `0x00` byte.

use alloc::{string::String, vec, vec::Vec};
use core::str::FromStr;

use num_bigint::{BigUint, ParseBigIntError};

/// Transaction fee
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Fee(BigUint);

impl Fee {
    /// Create a new [Fee] from an arbitrary precision value
    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Fetch the fee value
    pub fn value(&self) -> &BigUint {
        &self.0
    }

    /// Encode fee to minimal big-endian bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        match self.0.to_bytes_be() {
            b if b.is_empty() => vec![0u8],
            b => b,
        }
    }

    /// Encode fee to hex (always an even number of digits)
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }
}

impl From<u64> for Fee {
    fn from(v: u64) -> Self {
        Self(BigUint::from(v))
    }
}

impl From<u128> for Fee {
    fn from(v: u128) -> Self {
        Self(BigUint::from(v))
    }
}

impl From<BigUint> for Fee {
    fn from(v: BigUint) -> Self {
        Self(v)
    }
}

/// Parse a [Fee] from a decimal string
impl FromStr for Fee {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigUint::from_str(s).map(Self)
    }
}

impl core::fmt::Display for Fee {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
