//! Property-Based Test Generators
//!
//! Provides proptest strategies for form values that satisfy, or
//! deliberately break, the validation rules.

use proptest::prelude::*;

use core_kernel::Role;
use domain_claims::ClaimStatus;

/// Strategy for addresses accepted by the wallet rule
pub fn wallet_address_strategy() -> impl Strategy<Value = String> {
    "[a-fA-F0-9]{40}".prop_map(|digits| format!("0x{}", digits))
}

/// Strategy for `0x` addresses with the wrong number of hex digits
pub fn wrong_length_wallet_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[a-fA-F0-9]{1,39}", "[a-fA-F0-9]{41,60}"]
        .prop_map(|digits| format!("0x{}", digits))
}

/// Strategy for phone numbers, with or without a leading `+`
pub fn phone_strategy() -> impl Strategy<Value = String> {
    "\\+?[0-9]{10,15}"
}

/// Strategy for Aadhaar numbers (12 digits, first digit 2-9)
pub fn aadhaar_strategy() -> impl Strategy<Value = String> {
    "[2-9][0-9]{11}"
}

/// Strategy for PIN codes (6 digits, no leading zero)
pub fn pincode_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{5}"
}

/// Strategy for passwords meeting every strength requirement
pub fn strong_password_strategy() -> impl Strategy<Value = String> {
    ("[a-z]{2,6}", "[A-Z]{2,6}", "[0-9]{2,6}", "[@$!%*?&]{2,6}")
        .prop_map(|(lower, upper, digits, symbols)| format!("{}{}{}{}", upper, lower, symbols, digits))
}

/// Strategy for values that are blank after trimming
pub fn blank_strategy() -> impl Strategy<Value = String> {
    "[ \\t\\n]{0,8}"
}

pub fn role_strategy() -> impl Strategy<Value = Role> {
    prop_oneof![
        Just(Role::Patient),
        Just(Role::Validator),
        Just(Role::Issuer),
        Just(Role::Insurance),
    ]
}

pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::Pending),
        Just(ClaimStatus::Approved),
        Just(ClaimStatus::Rejected),
    ]
}

/// Strategy for backend ids
pub fn id_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000i64
}
