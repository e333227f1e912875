use crate::blockchain::sized_bytes::Bytes32;
use seno_macros::SenoSerial;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::hash::{Hash, Hasher};

#[derive(SenoSerial, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Coin {
    pub parent_coin_info: Bytes32,
    pub puzzle_hash: Bytes32,
    pub amount: u64,
}
impl Coin {
    #[must_use]
    pub fn new(parent_coin_info: Bytes32, puzzle_hash: Bytes32, amount: u64) -> Self {
        Self {
            parent_coin_info,
            puzzle_hash,
            amount,
        }
    }
    #[must_use]
    pub fn name(&self) -> Bytes32 {
        self.coin_id()
    }
    /// sha256(parent ‖ puzzle_hash ‖ amount) where the amount uses the minimal
    /// signed big endian encoding of the puzzle language.
    #[must_use]
    pub fn coin_id(&self) -> Bytes32 {
        let mut hasher = Sha256::new();
        hasher.update(self.parent_coin_info);
        hasher.update(self.puzzle_hash);
        hasher.update(amount_atom(self.amount));
        Bytes32::new(hasher.finalize().into())
    }
}
impl Hash for Coin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.name().as_ref());
    }
}

fn amount_atom(amount: u64) -> Vec<u8> {
    let amount_bytes = amount.to_be_bytes();
    if amount == 0 {
        vec![]
    } else if amount >= 0x8000_0000_0000_0000_u64 {
        let mut buf = Vec::with_capacity(9);
        buf.push(0u8);
        buf.extend(amount_bytes);
        buf
    } else {
        let leading_zero_bytes = (amount.leading_zeros() / 8) as usize;
        let start = if amount_bytes[leading_zero_bytes] & 0x80 != 0 {
            leading_zero_bytes - 1
        } else {
            leading_zero_bytes
        };
        amount_bytes[start..].to_vec()
    }
}
