//! Published vectors for key pairs, agreements and ciphers

use sharedkey_agreement::{
    Error, KeyAgreementError, NemKeyPair, NemSharedKey, PublicKey, SymbolKeyPair,
    SymbolSharedKey,
};
use sharedkey_api::{Cipher, SharedKey256};
use sharedkey_symmetric::{AesCbcCipher, AesGcmCipher};
use sharedkey_tests::vectors::{self, CipherVector};

#[test]
fn symbol_key_vectors() {
    for v in vectors::SYMBOL_KEYS {
        let pair = SymbolKeyPair::from_private_key(v.private_key());
        assert_eq!(*pair.public_key(), v.public_key(), "{}", v.private_key);
    }
}

#[test]
fn nem_key_vectors() {
    for v in vectors::NEM_KEYS {
        let pair = NemKeyPair::from_private_key(v.private_key());
        assert_eq!(*pair.public_key(), v.public_key(), "{}", v.private_key);
    }
}

#[test]
fn symbol_agreement_vectors() {
    for v in vectors::SYMBOL_AGREEMENTS {
        let key = SymbolSharedKey::derive(&v.private_key(), &v.other_public_key()).unwrap();
        assert_eq!(key, v.shared_key());
    }
}

#[test]
fn nem_agreement_vectors() {
    for v in vectors::NEM_AGREEMENTS {
        let key = NemSharedKey::derive(&v.private_key(), &v.other_public_key()).unwrap();
        assert_eq!(key, v.shared_key());
    }
}

#[test]
fn non_canonical_encodings_rejected() {
    let private_key = vectors::SYMBOL_KEYS[0].private_key();
    let encodings = vectors::non_canonical_encodings();
    assert_eq!(encodings.len(), 38);

    for bytes in encodings {
        let public_key = PublicKey::new(bytes);
        let err: KeyAgreementError =
            SymbolSharedKey::derive(&private_key, &public_key).unwrap_err();
        assert_eq!(err, Error::NonCanonicalEncoding, "{}", public_key);
        assert_eq!(
            NemSharedKey::derive(&private_key, &public_key).unwrap_err(),
            Error::NonCanonicalEncoding
        );
    }
}

#[test]
fn invalid_points_rejected() {
    let private_key = vectors::SYMBOL_KEYS[0].private_key();
    for encoding in vectors::INVALID_POINTS {
        let public_key: PublicKey = encoding.parse().unwrap();
        assert_eq!(
            SymbolSharedKey::derive(&private_key, &public_key).unwrap_err(),
            Error::InvalidPoint,
            "{}",
            encoding
        );
        assert_eq!(
            NemSharedKey::derive(&private_key, &public_key).unwrap_err(),
            Error::InvalidPoint,
            "{}",
            encoding
        );
    }
}

fn check_cipher<C: Cipher>(v: &CipherVector, make: impl Fn(&SharedKey256) -> C) {
    let key: SharedKey256 = v.key.parse().unwrap();
    let iv = hex::decode(v.iv).unwrap();
    let cipher = make(&key);

    let cipher_text = cipher.encrypt(v.clear_text, &iv).unwrap();
    assert_eq!(hex::encode(&cipher_text), v.cipher_text);
    assert_eq!(cipher.decrypt(&cipher_text, &iv).unwrap(), v.clear_text);
}

#[test]
fn aes_gcm_vectors() {
    for v in vectors::AES_GCM {
        check_cipher(v, AesGcmCipher::new);
    }
}

#[test]
fn aes_cbc_vectors() {
    for v in vectors::AES_CBC {
        check_cipher(v, AesCbcCipher::new);
    }
}

#[test]
fn agreement_then_gcm() {
    let alice = SymbolKeyPair::from_private_key(vectors::SYMBOL_KEYS[0].private_key());
    let bob = SymbolKeyPair::from_private_key(vectors::SYMBOL_KEYS[2].private_key());

    let key = alice.derive_shared_key(bob.public_key()).unwrap();
    let v = &vectors::AES_GCM[0];
    assert_eq!(key, v.key.parse::<SharedKey256>().unwrap());

    let iv = hex::decode(v.iv).unwrap();
    let cipher_text = AesGcmCipher::new(&key).encrypt(v.clear_text, &iv).unwrap();

    let bob_key = bob.derive_shared_key(alice.public_key()).unwrap();
    let clear_text = AesGcmCipher::new(&bob_key).decrypt(&cipher_text, &iv).unwrap();
    assert_eq!(clear_text, v.clear_text);
}
