//! Property-based tests for the AES collaborators

use proptest::prelude::*;
use sharedkey_api::{Cipher, Error, SharedKey256};
use sharedkey_symmetric::{AesCbcCipher, AesGcmCipher};

proptest! {
    #[test]
    fn gcm_roundtrip(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 0..=256)
    ) {
        let cipher = AesGcmCipher::new(&SharedKey256::new(key));
        let cipher_text = cipher.encrypt(&data, &iv).unwrap();
        prop_assert_eq!(cipher_text.len(), data.len() + AesGcmCipher::TAG_SIZE);
        prop_assert_eq!(cipher.decrypt(&cipher_text, &iv).unwrap(), data);
    }

    #[test]
    fn gcm_detects_tampering(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 0..=64),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255
    ) {
        let cipher = AesGcmCipher::new(&SharedKey256::new(key));
        let mut cipher_text = cipher.encrypt(&data, &iv).unwrap();
        let i = index.index(cipher_text.len());
        cipher_text[i] ^= flip;
        prop_assert_eq!(
            cipher.decrypt(&cipher_text, &iv).unwrap_err(),
            Error::AuthenticationFailed { context: "AES-256-GCM" }
        );
    }

    #[test]
    fn cbc_roundtrip(
        key in any::<[u8; 32]>(),
        iv in any::<[u8; 16]>(),
        data in prop::collection::vec(any::<u8>(), 0..=256)
    ) {
        let cipher = AesCbcCipher::new(&SharedKey256::new(key));
        let cipher_text = cipher.encrypt(&data, &iv).unwrap();
        prop_assert_eq!(cipher_text.len(), (data.len() / 16 + 1) * 16);
        prop_assert_eq!(cipher.decrypt(&cipher_text, &iv).unwrap(), data);
    }

    #[test]
    fn different_ivs_produce_different_ciphertexts(
        key in any::<[u8; 32]>(),
        iv1 in any::<[u8; 12]>(),
        iv2 in any::<[u8; 12]>(),
        data in prop::collection::vec(any::<u8>(), 1..=64)
    ) {
        prop_assume!(iv1 != iv2);
        let cipher = AesGcmCipher::new(&SharedKey256::new(key));
        prop_assert_ne!(cipher.encrypt(&data, &iv1).unwrap(), cipher.encrypt(&data, &iv2).unwrap());
    }
}
