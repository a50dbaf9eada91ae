//! Property-based tests for the key agreement pipeline

use proptest::prelude::*;
use sharedkey_agreement::{
    Error, NemKeyPair, NemSharedKey, PrivateKey, PublicKey, SymbolKeyPair, SymbolSharedKey,
};
use sharedkey_algorithms::ec::ed25519::{scalar_mult_base, CompressedPoint, Scalar};
use sharedkey_algorithms::kdf::HkdfSha256;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn symbol_agreement_is_symmetric(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let alice = SymbolKeyPair::from_private_key(PrivateKey::new(a));
        let bob = SymbolKeyPair::from_private_key(PrivateKey::new(b));
        prop_assert_eq!(
            alice.derive_shared_key(bob.public_key()).unwrap(),
            bob.derive_shared_key(alice.public_key()).unwrap()
        );
    }

    #[test]
    fn nem_agreement_is_symmetric(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let alice = NemKeyPair::from_private_key(PrivateKey::new(a));
        let bob = NemKeyPair::from_private_key(PrivateKey::new(b));
        prop_assert_eq!(
            alice.derive_shared_key(bob.public_key()).unwrap(),
            bob.derive_shared_key(alice.public_key()).unwrap()
        );
    }

    #[test]
    fn derivation_is_deterministic(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let private_key = PrivateKey::new(a);
        let public_key = *SymbolKeyPair::from_private_key(PrivateKey::new(b)).public_key();
        prop_assert_eq!(
            SymbolSharedKey::derive(&private_key, &public_key).unwrap(),
            SymbolSharedKey::derive(&private_key, &public_key).unwrap()
        );
    }

    #[test]
    fn kdf_is_deterministic(ikm in any::<[u8; 32]>(), info in prop::collection::vec(any::<u8>(), 0..16)) {
        let k1 = HkdfSha256::derive_array::<32>(None, &ikm, &info).unwrap();
        let k2 = HkdfSha256::derive_array::<32>(None, &ikm, &info).unwrap();
        prop_assert_eq!(&k1[..], &k2[..]);
    }

    #[test]
    fn decode_encode_roundtrip(seed in any::<[u8; 32]>()) {
        let point = scalar_mult_base(&Scalar::from_bytes_clamped(seed));
        let encoded = point.compress();
        let decoded = encoded.decompress().unwrap();
        prop_assert_eq!(decoded, point);
        prop_assert_eq!(decoded.compress(), encoded);
        prop_assert!(encoded.decompress_negated().unwrap().is_in_prime_order_subgroup());
    }

    #[test]
    fn non_canonical_always_rejected(low in 0xedu8..=0xff, sign in any::<bool>(), a in any::<[u8; 32]>()) {
        let mut bytes = [0xffu8; 32];
        bytes[0] = low;
        bytes[31] = if sign { 0xff } else { 0x7f };
        prop_assert!(!CompressedPoint::from_bytes(bytes).is_canonical());
        prop_assert_eq!(
            NemSharedKey::derive(&PrivateKey::new(a), &PublicKey::new(bytes)).unwrap_err(),
            Error::NonCanonicalEncoding
        );
    }

    #[test]
    fn arbitrary_keys_never_panic(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        // any 32 bytes either yield a key or one of the two rejections
        match SymbolSharedKey::derive(&PrivateKey::new(a), &PublicKey::new(b)) {
            Ok(_) | Err(Error::NonCanonicalEncoding) | Err(Error::InvalidPoint) => {}
            Err(e) => prop_assert!(false, "unexpected error {:?}", e),
        }
    }
}
