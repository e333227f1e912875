pub mod blockchain;
pub mod config;
pub mod errors;
pub mod service_groups;
pub mod validation;

fn _version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
fn _pkg_name() -> &'static str {
    env!("CARGO_PKG_NAME")
}

pub fn version() -> String {
    format!("{}: {}", _pkg_name(), _version())
}

#[test]
fn test_version() {
    assert!(version().starts_with("seno_core: "));
}
