use crate::blockchain::announcement::{AnnouncementId, AnnouncementKind};
use crate::blockchain::condition_opcode::ConditionOpcode;
use crate::blockchain::sized_bytes::Bytes32;
use crate::errors::AnnouncementError;
use seno_macros::SenoSerial;
use serde::{Deserialize, Serialize};

/// A condition as returned by running a coin's puzzle: the opcode atom and
/// its argument atoms.
#[derive(SenoSerial, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ConditionWithArgs {
    pub opcode: u8,
    pub vars: Vec<Vec<u8>>,
}
impl ConditionWithArgs {
    pub fn new(opcode: impl Into<u8>, vars: Vec<Vec<u8>>) -> Self {
        Self {
            opcode: opcode.into(),
            vars,
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AnnouncementCondition {
    Create {
        kind: AnnouncementKind,
        message: Vec<u8>,
    },
    Assert {
        kind: AnnouncementKind,
        announcement_id: AnnouncementId,
    },
}
impl AnnouncementCondition {
    /// Returns `Ok(None)` for conditions that are not announcements.
    ///
    /// With `strict` set, trailing arguments are rejected instead of ignored.
    pub fn parse(
        condition: &ConditionWithArgs,
        coin_id: &Bytes32,
        strict: bool,
    ) -> Result<Option<Self>, AnnouncementError> {
        let Some(opcode) = ConditionOpcode::parse(condition.opcode) else {
            return Ok(None);
        };
        let parse_error = |reason: String| AnnouncementError::ConditionParse {
            coin_id: *coin_id,
            opcode: condition.opcode,
            reason,
        };
        let first = match condition.vars.as_slice() {
            [] => return Err(parse_error("missing argument".to_string())),
            [first] => first,
            [first, rest @ ..] => {
                if strict {
                    return Err(parse_error(format!(
                        "{} unexpected trailing arguments",
                        rest.len()
                    )));
                }
                first
            }
        };
        let parse_id = |arg: &Vec<u8>| {
            Bytes32::parse(arg).map_err(|_| {
                parse_error(format!(
                    "announcement id must be {} bytes, got {}",
                    Bytes32::SIZE,
                    arg.len()
                ))
            })
        };
        let parsed = match opcode {
            ConditionOpcode::CreateCoinAnnouncement => AnnouncementCondition::Create {
                kind: AnnouncementKind::Coin,
                message: first.clone(),
            },
            ConditionOpcode::AssertCoinAnnouncement => AnnouncementCondition::Assert {
                kind: AnnouncementKind::Coin,
                announcement_id: parse_id(first)?,
            },
            ConditionOpcode::CreatePuzzleAnnouncement => AnnouncementCondition::Create {
                kind: AnnouncementKind::Puzzle,
                message: first.clone(),
            },
            ConditionOpcode::AssertPuzzleAnnouncement => AnnouncementCondition::Assert {
                kind: AnnouncementKind::Puzzle,
                announcement_id: parse_id(first)?,
            },
        };
        Ok(Some(parsed))
    }
}
