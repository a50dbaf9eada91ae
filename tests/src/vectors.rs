//! Published test vectors
//!
//! Key and agreement vectors are those of the Symbol and NEM SDKs. All values
//! are lowercase hex.

use sharedkey_api::{PrivateKey, PublicKey, SharedKey256};

/// A private key and its public key under one profile
#[derive(Debug, Clone, Copy)]
pub struct KeyVector {
    pub private_key: &'static str,
    pub public_key: &'static str,
}

/// One side of an agreement and the key it must produce
#[derive(Debug, Clone, Copy)]
pub struct AgreementVector {
    pub private_key: &'static str,
    pub other_public_key: &'static str,
    pub shared_key: &'static str,
}

/// A fixed-key, fixed-IV cipher vector
#[derive(Debug, Clone, Copy)]
pub struct CipherVector {
    pub key: &'static str,
    pub iv: &'static str,
    pub clear_text: &'static [u8],
    pub cipher_text: &'static str,
}

pub const SYMBOL_KEYS: &[KeyVector] = &[
    KeyVector {
        private_key: "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced",
        public_key: "2e834140fd66cf87b254a693a2c7862c819217b676d3943267156625e816ec6f",
    },
    KeyVector {
        private_key: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        public_key: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
    },
    KeyVector {
        private_key: "5b0e3fa5d3b49a79022d7c1e121ba1cbbf4db5821f47ab8c708ef88defc29bfe",
        public_key: "4875fd2e32875d1bc6567745f1509f0f890a1bf8ee59fa74452fa4183a270e03",
    },
];

pub const NEM_KEYS: &[KeyVector] = &[
    KeyVector {
        private_key: "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced",
        public_key: "c5f54ba980fcbb657dbaaa42700539b207873e134d2375efeab5f1ab52f87844",
    },
    KeyVector {
        private_key: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
        public_key: "e5a9034d692618fcca9787732690d2da44b65847c695ebd15649074038136624",
    },
    KeyVector {
        private_key: "5b0e3fa5d3b49a79022d7c1e121ba1cbbf4db5821f47ab8c708ef88defc29bfe",
        public_key: "96eb2a145211b1b7ab5f0d4b14f8abc8d695c7aee31a3cfc2d4881313c68eea3",
    },
];

pub const SYMBOL_AGREEMENTS: &[AgreementVector] = &[
    AgreementVector {
        private_key: "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced",
        other_public_key: "4875fd2e32875d1bc6567745f1509f0f890a1bf8ee59fa74452fa4183a270e03",
        shared_key: "ef5d8c6def05a17d5893781b0a33c19d75dc8190f5b2f6a49548f8ff9f0c8d34",
    },
    AgreementVector {
        private_key: "5b0e3fa5d3b49a79022d7c1e121ba1cbbf4db5821f47ab8c708ef88defc29bfe",
        other_public_key: "2e834140fd66cf87b254a693a2c7862c819217b676d3943267156625e816ec6f",
        shared_key: "ef5d8c6def05a17d5893781b0a33c19d75dc8190f5b2f6a49548f8ff9f0c8d34",
    },
];

pub const NEM_AGREEMENTS: &[AgreementVector] = &[
    AgreementVector {
        private_key: "575dbb3062267eff57c970a336ebbc8fbcfe12c5bd3ed7bc11eb0481d7704ced",
        other_public_key: "96eb2a145211b1b7ab5f0d4b14f8abc8d695c7aee31a3cfc2d4881313c68eea3",
        shared_key: "e3ad4dcf861351656f44c78159a20c5f9be22bcd951da2b93721da90bd790288",
    },
    AgreementVector {
        private_key: "5b0e3fa5d3b49a79022d7c1e121ba1cbbf4db5821f47ab8c708ef88defc29bfe",
        other_public_key: "c5f54ba980fcbb657dbaaa42700539b207873e134d2375efeab5f1ab52f87844",
        shared_key: "e3ad4dcf861351656f44c78159a20c5f9be22bcd951da2b93721da90bd790288",
    },
];

/// Encodings of the identity, torsion points and a mixed-order point
pub const INVALID_POINTS: &[&str] = &[
    "0100000000000000000000000000000000000000000000000000000000000000",
    "ecffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff7f",
    "0000000000000000000000000000000000000000000000000000000000000000",
    "0000000000000000000000000000000000000000000000000000000000000080",
    "26e8958fc2b227b045c3f489f2ef98f0d5dfac05d3c63339b13802886d53fc05",
    "c7176a703d4dd84fba3c0b760d10670f2a2053fa2c39ccc64ec7fd7792ac037a",
    "da99e28ba529cdde35a25fba9059e78ecaee239f99755b9b1aa4f65df00803e2",
    "0200000000000000000000000000000000000000000000000000000000000000",
];

pub const AES_GCM: &[CipherVector] = &[
    CipherVector {
        key: "ef5d8c6def05a17d5893781b0a33c19d75dc8190f5b2f6a49548f8ff9f0c8d34",
        iv: "a1a2a3a4a5a6a7a8a9aaabac",
        clear_text: b"the quick brown fox jumps over the lazy dog",
        cipher_text: "13aa3a904896d0ba72537cbf976dadf6903a1247e2814efe48269ca8a95efeb6e717ed15557e936cba6d47fa5211801e9d31e62269d0a2c2e48eed",
    },
    CipherVector {
        key: "ef5d8c6def05a17d5893781b0a33c19d75dc8190f5b2f6a49548f8ff9f0c8d34",
        iv: "a1a2a3a4a5a6a7a8a9aaabac",
        clear_text: b"",
        cipher_text: "98247f1ba5753a1db7cfea3e9f628748",
    },
];

pub const AES_CBC: &[CipherVector] = &[
    CipherVector {
        key: "ef5d8c6def05a17d5893781b0a33c19d75dc8190f5b2f6a49548f8ff9f0c8d34",
        iv: "000102030405060708090a0b0c0d0e0f",
        clear_text: b"the quick brown fox jumps over the lazy dog",
        cipher_text: "abbf911fbc26b4e4ed902b8cce9cf1641ea5581d1a644eea1980c04923479f5fb5b677a70387e0c71752980576f7ced6",
    },
    CipherVector {
        key: "ef5d8c6def05a17d5893781b0a33c19d75dc8190f5b2f6a49548f8ff9f0c8d34",
        iv: "000102030405060708090a0b0c0d0e0f",
        clear_text: b"",
        cipher_text: "9570848058a92dd874eac3c78cf7bba3",
    },
];

/// All 38 encodings whose y lies in [p, 2^255), with either sign bit
pub fn non_canonical_encodings() -> Vec<[u8; 32]> {
    let mut out = Vec::new();
    for top in [0x7fu8, 0xff] {
        for low in 0xedu8..=0xff {
            let mut bytes = [0xffu8; 32];
            bytes[0] = low;
            bytes[31] = top;
            out.push(bytes);
        }
    }
    out
}

impl KeyVector {
    pub fn private_key(&self) -> PrivateKey {
        parse(self.private_key)
    }

    pub fn public_key(&self) -> PublicKey {
        parse(self.public_key)
    }
}

impl AgreementVector {
    pub fn private_key(&self) -> PrivateKey {
        parse(self.private_key)
    }

    pub fn other_public_key(&self) -> PublicKey {
        parse(self.other_public_key)
    }

    pub fn shared_key(&self) -> SharedKey256 {
        parse(self.shared_key)
    }
}

fn parse<T>(hex: &str) -> T
where
    T: core::str::FromStr,
    T::Err: core::fmt::Debug,
{
    match hex.parse() {
        Ok(value) => value,
        Err(e) => panic!("malformed vector {}: {:?}", hex, e),
    }
}
