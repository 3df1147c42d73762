//! Proptest generators for property-based testing.

use proptest::prelude::*;
use serde_json::{Map, Value};

use ztgate_core::Identity;

use crate::fixtures::make_identity;

/// Generate a plausible username.
pub fn username() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,15}".prop_map(String::from)
}

/// Generate an enrolled identity with a seeded ed25519 credential.
pub fn identity() -> impl Strategy<Value = Identity> {
    (username(), any::<[u8; 32]>()).prop_map(|(name, seed)| make_identity(&name, seed))
}

/// Generate an arbitrary JSON value.
///
/// Leaves are null/bool/integer/string; collections are arrays and objects.
/// Floats are excluded so serialize-then-parse comparisons stay exact.
pub fn json_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 _-]{0,24}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 24, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::vec(("[a-z]{1,8}", inner), 0..6).prop_map(|entries| {
                let mut map = Map::new();
                for (k, v) in entries {
                    map.insert(k, v);
                }
                Value::Object(map)
            }),
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ztgate_core::{decode, DecodedPayload};

    proptest! {
        #[test]
        fn test_decode_roundtrips_any_json(value in json_value()) {
            let encoded = serde_json::to_vec(&value).unwrap();
            prop_assert_eq!(decode(&encoded), DecodedPayload::Json(value));
        }

        #[test]
        fn test_identity_fingerprint_deterministic(
            name in username(),
            seed in any::<[u8; 32]>(),
        ) {
            let a = make_identity(&name, seed);
            let b = make_identity(&name, seed);
            prop_assert_eq!(a.fingerprint(), b.fingerprint());
        }

        #[test]
        fn test_generated_identities_carry_their_username(id in identity()) {
            prop_assert!(!id.username.as_str().is_empty());
            prop_assert!(!id.certificate.is_empty());
            prop_assert!(!id.private_key.is_empty());
        }
    }
}
