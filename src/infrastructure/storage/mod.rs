pub mod env;
pub mod keychain;
pub mod memory;

pub use env::EnvCredentialStore;
pub use keychain::KeyringCredentialStore;
pub use memory::MemoryCredentialStore;
