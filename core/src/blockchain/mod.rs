pub mod announcement;
pub mod coin;
pub mod condition_opcode;
pub mod condition_with_args;
pub mod sized_bytes;
pub mod spend_bundle_conditions;
