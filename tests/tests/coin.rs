use seno_core::blockchain::coin::Coin;
use seno_core::blockchain::sized_bytes::Bytes32;
use seno_serialize::{hash_256, SenoSerialize};
use std::collections::HashSet;

fn expected_id(coin: &Coin, amount_atom: &[u8]) -> Bytes32 {
    let mut buf = vec![];
    buf.extend_from_slice(coin.parent_coin_info.as_slice());
    buf.extend_from_slice(coin.puzzle_hash.as_slice());
    buf.extend_from_slice(amount_atom);
    Bytes32::new(hash_256(buf))
}

fn coin_with_amount(amount: u64) -> Coin {
    Coin::new(Bytes32::new([3u8; 32]), Bytes32::new([4u8; 32]), amount)
}

#[test]
fn test_coin_id_amount_encoding() {
    let cases: [(u64, &[u8]); 7] = [
        (0, &[]),
        (1, &[0x01]),
        (0x7f, &[0x7f]),
        (0x80, &[0x00, 0x80]),
        (0x1234, &[0x12, 0x34]),
        (0x8000_0000_0000_0000, &[0x00, 0x80, 0, 0, 0, 0, 0, 0, 0]),
        (
            u64::MAX,
            &[0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff],
        ),
    ];
    for (amount, atom) in cases {
        let coin = coin_with_amount(amount);
        assert_eq!(coin.coin_id(), expected_id(&coin, atom), "amount {amount}");
    }
}

#[test]
fn test_coin_name_is_coin_id() {
    let coin = coin_with_amount(1_750_000_000_000);
    assert_eq!(coin.name(), coin.coin_id());
}

#[test]
fn test_coin_hash_follows_identity() {
    let mut coins = HashSet::new();
    coins.insert(coin_with_amount(5));
    coins.insert(coin_with_amount(5));
    coins.insert(coin_with_amount(6));
    assert_eq!(coins.len(), 2);
}

#[test]
fn test_coin_streamable_encoding() {
    let coin = coin_with_amount(258);
    let bytes = coin.to_bytes();
    assert_eq!(bytes.len(), 32 + 32 + 8);
    assert_eq!(&bytes[64..], &258u64.to_be_bytes());
    assert_eq!(Coin::from_slice(&bytes).unwrap(), coin);
    assert!(Coin::from_slice(&bytes[..70]).is_err());
}
