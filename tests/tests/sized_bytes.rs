use seno_core::blockchain::sized_bytes::Bytes32;
use std::str::FromStr;

#[test]
fn test_bytes32_from_hex() {
    let hex = format!("0x{:064x}", 8);
    let with_prefix = Bytes32::from_str(&hex).unwrap();
    let without_prefix = Bytes32::from_str(&hex[2..]).unwrap();
    assert_eq!(with_prefix, without_prefix);
    assert_eq!(with_prefix.bytes()[31], 8);
    assert_eq!(with_prefix.to_string(), hex[2..]);
}

#[test]
fn test_bytes32_uppercase_hex() {
    let hex = "AB".repeat(32);
    assert_eq!(Bytes32::from_str(&hex).unwrap(), Bytes32::new([0xab; 32]));
}

#[test]
fn test_bad_bytes32() {
    assert!(Bytes32::from_str("0x8").is_err());
    assert!(Bytes32::from_str(&"00".repeat(33)).is_err());
    assert!(Bytes32::from_str(&"zz".repeat(32)).is_err());
    assert!(Bytes32::parse(&[0u8; 31]).is_err());
    assert_eq!(Bytes32::parse(&[1u8; 32]).unwrap(), Bytes32::new([1u8; 32]));
}

#[test]
fn test_bytes32_null() {
    assert!(Bytes32::default().is_null());
    assert!(!Bytes32::new([1u8; 32]).is_null());
}

#[test]
fn test_bytes32_json() {
    let value = Bytes32::new([0x5a; 32]);
    let json = serde_json::to_string(&value).unwrap();
    assert_eq!(json, format!("\"{}\"", "5a".repeat(32)));
    assert_eq!(serde_json::from_str::<Bytes32>(&json).unwrap(), value);
    assert!(serde_json::from_str::<Bytes32>("\"0x1234\"").is_err());
}
