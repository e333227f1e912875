use crate::blockchain::coin::Coin;
use crate::blockchain::condition_with_args::ConditionWithArgs;
use crate::blockchain::sized_bytes::Bytes32;
use seno_macros::SenoSerial;
use serde::{Deserialize, Serialize};

/// The conditions produced by one coin spend, tagged with the coin's identity.
#[derive(SenoSerial, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct SpendConditions {
    pub coin_id: Bytes32,
    pub puzzle_hash: Bytes32,
    pub conditions: Vec<ConditionWithArgs>,
}
impl SpendConditions {
    #[must_use]
    pub fn new(coin: &Coin, conditions: Vec<ConditionWithArgs>) -> Self {
        Self {
            coin_id: coin.coin_id(),
            puzzle_hash: coin.puzzle_hash,
            conditions,
        }
    }
}

#[derive(SenoSerial, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct SpendBundleConditions {
    pub spends: Vec<SpendConditions>,
}
impl SpendBundleConditions {
    #[must_use]
    pub fn new(spends: Vec<SpendConditions>) -> Self {
        Self { spends }
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spends.is_empty()
    }
    #[must_use]
    pub fn condition_count(&self) -> usize {
        self.spends.iter().map(|s| s.conditions.len()).sum()
    }
}
