//! Constants for the Edwards curve and the key-agreement protocol built on it

pub mod agreement;
pub mod ed25519;
