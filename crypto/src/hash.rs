use std::convert::TryFrom;
use std::fmt::{
    Display,
    Formatter
};

use serde::{Serialize, Deserialize};

/// Raw bytes of a 256-bit hash
pub type Hash256Data = [u8; 32];

/// A 256-bit block hash
///
/// Hashes enter this codebase fully formed (from hardcoded tables or from
/// the node's block index). They are only ever compared, keyed on and
/// displayed, so no digest machinery lives here.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Hash256(Hash256Data);

impl Hash256 {
    pub fn null_hash() -> Self {
        Hash256([0; 32])
    }
    pub fn data(&self) -> &Hash256Data {
        &self.0
    }
}

impl Display for Hash256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl From<Hash256Data> for Hash256 {
    fn from(data: Hash256Data) -> Self {
        Hash256(data)
    }
}

impl TryFrom<&str> for Hash256 {
    type Error = hex::FromHexError;
    fn try_from(data: &str) -> Result<Self, Self::Error> {
        if data.len() != 64 {
            return Err(hex::FromHexError::InvalidStringLength)
        }
        let mut buf = [0; 32];
        buf.copy_from_slice(&hex::decode(data)?);
        Ok(Hash256(buf))
    }
}
