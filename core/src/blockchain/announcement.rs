use crate::blockchain::sized_bytes::Bytes32;
use crate::errors::AnnouncementError;
use seno_macros::SenoSerial;
use seno_serialize::{hash_256, SenoSerialize};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Cursor, Error, ErrorKind};

/// Content addressed name of an announcement.
pub type AnnouncementId = Bytes32;

pub const COIN_ANNOUNCEMENT_TAG: u8 = 0x01;
pub const PUZZLE_ANNOUNCEMENT_TAG: u8 = 0x02;

#[derive(SenoSerial, Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum AnnouncementKind {
    Coin = COIN_ANNOUNCEMENT_TAG as isize,
    Puzzle = PUZZLE_ANNOUNCEMENT_TAG as isize,
}
impl AnnouncementKind {
    /// Prefix hashed ahead of the origin so the two namespaces never share ids.
    #[must_use]
    pub const fn domain_tag(self) -> u8 {
        self as u8
    }
}
impl TryFrom<u8> for AnnouncementKind {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            COIN_ANNOUNCEMENT_TAG => Ok(AnnouncementKind::Coin),
            PUZZLE_ANNOUNCEMENT_TAG => Ok(AnnouncementKind::Puzzle),
            other => Err(other),
        }
    }
}
impl fmt::Display for AnnouncementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnouncementKind::Coin => f.write_str("coin"),
            AnnouncementKind::Puzzle => f.write_str("puzzle"),
        }
    }
}

/// Immutable once built. Every constructor checks the message length, so
/// there is no unchecked decode path.
#[derive(Clone, Hash, PartialEq, Eq, Serialize, Debug)]
pub struct Announcement {
    kind: AnnouncementKind,
    origin_info: Bytes32,
    message: Vec<u8>,
}
impl Announcement {
    /// Builds an announcement, rejecting messages over `max_message_length`.
    pub fn new(
        kind: AnnouncementKind,
        origin_info: Bytes32,
        message: &[u8],
        max_message_length: usize,
    ) -> Result<Self, AnnouncementError> {
        check_message_length(message, max_message_length)?;
        Ok(Self {
            kind,
            origin_info,
            message: message.to_vec(),
        })
    }
    #[must_use]
    pub fn kind(&self) -> AnnouncementKind {
        self.kind
    }
    #[must_use]
    pub fn origin_info(&self) -> &Bytes32 {
        &self.origin_info
    }
    #[must_use]
    pub fn message(&self) -> &[u8] {
        &self.message
    }
    #[must_use]
    pub fn name(&self) -> AnnouncementId {
        hash_announcement(self.kind, &self.origin_info, &self.message)
    }
    /// Streamable form: kind byte, origin, length prefixed message.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = self.kind.to_bytes();
        bytes.extend(self.origin_info.to_bytes());
        bytes.extend(self.message.to_bytes());
        bytes
    }
    /// Decodes the streamable form, applying the same length limit as [`Announcement::new`].
    pub fn from_bytes(bytes: &[u8], max_message_length: usize) -> Result<Self, Error> {
        let mut cursor = Cursor::new(bytes);
        let kind = AnnouncementKind::from_bytes(&mut cursor)?;
        let origin_info = Bytes32::from_bytes(&mut cursor)?;
        let message_len = u32::from_bytes(&mut cursor)? as usize;
        check_message_length_value(message_len, max_message_length)?;
        let start = cursor.position() as usize;
        let end = start + message_len;
        if end != bytes.len() {
            return Err(Error::new(
                ErrorKind::InvalidData,
                format!(
                    "Announcement message length {message_len} does not match the {} bytes left",
                    bytes.len() - start
                ),
            ));
        }
        Ok(Self::new(kind, origin_info, &bytes[start..end], max_message_length)?)
    }
}

/// Computes the id of `(kind, origin_info, message)` without building an
/// [`Announcement`].
pub fn announcement_id(
    kind: AnnouncementKind,
    origin_info: &Bytes32,
    message: &[u8],
    max_message_length: usize,
) -> Result<AnnouncementId, AnnouncementError> {
    check_message_length(message, max_message_length)?;
    Ok(hash_announcement(kind, origin_info, message))
}

fn check_message_length(message: &[u8], max: usize) -> Result<(), AnnouncementError> {
    check_message_length_value(message.len(), max)
}

fn check_message_length_value(length: usize, max: usize) -> Result<(), AnnouncementError> {
    if length > max {
        Err(AnnouncementError::MessageTooLong { length, max })
    } else {
        Ok(())
    }
}

fn hash_announcement(kind: AnnouncementKind, origin_info: &Bytes32, message: &[u8]) -> Bytes32 {
    let mut buf = Vec::with_capacity(1 + Bytes32::SIZE + message.len());
    buf.push(kind.domain_tag());
    buf.extend_from_slice(origin_info.as_slice());
    buf.extend_from_slice(message);
    Bytes32::new(hash_256(buf))
}
