use serde::{Deserialize, Serialize};

pub const CREATE_COIN_ANNOUNCEMENT: u8 = 60;
pub const ASSERT_COIN_ANNOUNCEMENT: u8 = 61;
pub const CREATE_PUZZLE_ANNOUNCEMENT: u8 = 62;
pub const ASSERT_PUZZLE_ANNOUNCEMENT: u8 = 63;

/// The announcement opcodes emitted by the puzzle engine. Their values are
/// consensus and must not change.
#[derive(Copy, Clone, Hash, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub enum ConditionOpcode {
    CreateCoinAnnouncement = CREATE_COIN_ANNOUNCEMENT as isize,
    AssertCoinAnnouncement = ASSERT_COIN_ANNOUNCEMENT as isize,
    CreatePuzzleAnnouncement = CREATE_PUZZLE_ANNOUNCEMENT as isize,
    AssertPuzzleAnnouncement = ASSERT_PUZZLE_ANNOUNCEMENT as isize,
}
impl ConditionOpcode {
    /// `None` for opcodes owned by other parts of the validator.
    #[must_use]
    pub fn parse(value: u8) -> Option<Self> {
        match value {
            CREATE_COIN_ANNOUNCEMENT => Some(ConditionOpcode::CreateCoinAnnouncement),
            ASSERT_COIN_ANNOUNCEMENT => Some(ConditionOpcode::AssertCoinAnnouncement),
            CREATE_PUZZLE_ANNOUNCEMENT => Some(ConditionOpcode::CreatePuzzleAnnouncement),
            ASSERT_PUZZLE_ANNOUNCEMENT => Some(ConditionOpcode::AssertPuzzleAnnouncement),
            _ => None,
        }
    }
}
impl From<ConditionOpcode> for u8 {
    fn from(value: ConditionOpcode) -> Self {
        value as u8
    }
}
