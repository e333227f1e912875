use crate::blockchain::sized_bytes::Bytes32;
use crate::validation::verdict::UnmetAssertion;
use std::io::{Error, ErrorKind};
use thiserror::Error;

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum AnnouncementError {
    #[error("Invalid condition {opcode} on coin {coin_id}: {reason}")]
    ConditionParse {
        coin_id: Bytes32,
        opcode: u8,
        reason: String,
    },
    #[error("Announcement message of {length} bytes exceeds the maximum of {max}")]
    MessageTooLong { length: usize, max: usize },
    #[error("{} unmet announcement assertion(s), first: {}", .0.len(), first_unmet(.0))]
    UnmetAssertions(Vec<UnmetAssertion>),
}
impl From<AnnouncementError> for Error {
    fn from(value: AnnouncementError) -> Self {
        Error::new(ErrorKind::InvalidInput, value)
    }
}

fn first_unmet(unmet: &[UnmetAssertion]) -> String {
    unmet
        .first()
        .map(ToString::to_string)
        .unwrap_or_else(|| "none".to_string())
}

#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum ServiceGroupError {
    #[error("Unknown service group: {0}")]
    UnknownGroup(String),
}
impl From<ServiceGroupError> for Error {
    fn from(value: ServiceGroupError) -> Self {
        Error::new(ErrorKind::NotFound, value)
    }
}
