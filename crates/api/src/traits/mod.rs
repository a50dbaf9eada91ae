//! Trait seams between the agreement and the ciphers that consume its output

pub mod agreement;
pub mod cipher;

pub use agreement::KeyAgreement;
pub use cipher::Cipher;
