// PSP34 Ledger Core - Core Types
// This module defines the token identifier and account types.

use serde::de::Error as SerdeError;
use serde::{Deserialize, Serialize};
use std::{
    convert::TryInto,
    fmt::{Display, Error, Formatter},
    str::FromStr,
};

// ========================================
// Token Identifier
// ========================================

/// Polymorphic token identifier
///
/// A token is named by one of five unsigned integer widths or an
/// arbitrary-length byte sequence. Equality and ordering are structural
/// (variant tag first, then value); there is no coercion between variants,
/// so `U8(5)`, `U16(5)` and `Bytes(vec![5])` are three distinct identifiers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TokenId {
    /// 8-bit identifier
    U8(u8),

    /// 16-bit identifier
    U16(u16),

    /// 32-bit identifier
    U32(u32),

    /// 64-bit identifier
    U64(u64),

    /// 128-bit identifier
    U128(u128),

    /// Arbitrary-length byte sequence identifier
    Bytes(Vec<u8>),
}

impl Display for TokenId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            TokenId::U8(v) => write!(f, "u8:{}", v),
            TokenId::U16(v) => write!(f, "u16:{}", v),
            TokenId::U32(v) => write!(f, "u32:{}", v),
            TokenId::U64(v) => write!(f, "u64:{}", v),
            TokenId::U128(v) => write!(f, "u128:{}", v),
            TokenId::Bytes(bytes) => write!(f, "bytes:{}", hex::encode(bytes)),
        }
    }
}

// ========================================
// Account
// ========================================

pub const ACCOUNT_SIZE: usize = 32; // 32 bytes / 256 bits

/// Opaque account identity
///
/// The ledger never interprets the contents; accounts only need to be
/// comparable and usable as map keys. Rendered as hex for diagnostics
/// and serialization.
#[derive(Eq, PartialEq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct Account([u8; ACCOUNT_SIZE]);

impl Account {
    pub const fn new(bytes: [u8; ACCOUNT_SIZE]) -> Self {
        Account(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ACCOUNT_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl FromStr for Account {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| "Invalid hex string")?;
        let bytes: [u8; ACCOUNT_SIZE] = bytes.try_into().map_err(|_| "Invalid account")?;
        Ok(Account::new(bytes))
    }
}

impl Display for Account {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", &self.to_hex())
    }
}

impl Serialize for Account {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'a> Deserialize<'a> for Account {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'a>,
    {
        let hex = String::deserialize(deserializer)?;
        if hex.len() != ACCOUNT_SIZE * 2 {
            return Err(SerdeError::custom("Invalid hex length"));
        }

        let decoded_hex = hex::decode(hex).map_err(SerdeError::custom)?;
        let bytes: [u8; ACCOUNT_SIZE] = decoded_hex.try_into().map_err(|_| {
            SerdeError::custom("Could not transform hex to bytes array for Account")
        })?;
        Ok(Account::new(bytes))
    }
}
