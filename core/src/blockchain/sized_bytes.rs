use hex::encode;
use seno_serialize::SenoSerialize;
use serde::de::Visitor;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::io::{Cursor, Error, ErrorKind, Read};
use std::str::FromStr;

pub fn prep_hex_str(to_fix: &str) -> String {
    let lc = to_fix.to_lowercase();
    if let Some(s) = lc.strip_prefix("0x") {
        s.to_string()
    } else {
        lc
    }
}

fn parse_hex<const SIZE: usize>(hex: &str) -> Result<[u8; SIZE], Error> {
    let decoded = hex::decode(prep_hex_str(hex))
        .map_err(|e| Error::new(ErrorKind::InvalidInput, format!("Invalid hex: {e}")))?;
    decoded.try_into().map_err(|v: Vec<u8>| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("Expected {SIZE} bytes, got {}", v.len()),
        )
    })
}

/// Fixed 32 byte value used for coin ids, puzzle hashes and announcement ids.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bytes32 {
    pub bytes: [u8; 32],
}
impl Bytes32 {
    pub const SIZE: usize = 32;

    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }
    /// Strict conversion, a slice of any other length is an error.
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("Expected {} bytes, got {}", Self::SIZE, bytes.len()),
            )
        })?;
        Ok(Self { bytes })
    }
    #[must_use]
    pub fn bytes(&self) -> [u8; 32] {
        self.bytes
    }
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.bytes == [0u8; 32]
    }
}

impl AsRef<[u8]> for Bytes32 {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<[u8; 32]> for Bytes32 {
    fn from(bytes: [u8; 32]) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8; 32]> for Bytes32 {
    fn from(bytes: &[u8; 32]) -> Self {
        Self::new(*bytes)
    }
}

impl FromStr for Bytes32 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex::<32>(s).map(Self::new)
    }
}

impl fmt::Display for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode(self.bytes))
    }
}

impl fmt::Debug for Bytes32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", encode(self.bytes))
    }
}

impl Serialize for Bytes32 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

struct Bytes32Visitor;

impl Visitor<'_> for Bytes32Visitor {
    type Value = Bytes32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Expecting a hex String of 32 bytes")
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Bytes32::from_str(value).map_err(E::custom)
    }
}

impl<'a> Deserialize<'a> for Bytes32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'a>,
    {
        deserializer.deserialize_str(Bytes32Visitor)
    }
}

impl SenoSerialize for Bytes32 {
    fn to_bytes(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }
    fn from_bytes<T: AsRef<[u8]>>(bytes: &mut Cursor<T>) -> Result<Self, Error> {
        let mut buf = [0u8; 32];
        bytes.read_exact(&mut buf).map_err(|_| {
            Error::new(
                ErrorKind::InvalidInput,
                format!("Failed to Parse Bytes32, expected length {}", Self::SIZE),
            )
        })?;
        Ok(buf.into())
    }
}
