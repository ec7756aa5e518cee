pub mod daemon;
pub mod decryption_key;
pub mod eon_key;
pub mod epoch;
pub mod epoch_key;
pub mod health;
pub mod init;
pub mod version;

pub use daemon::Daemon;
pub use decryption_key::DecryptionKey;
pub use eon_key::EonKey;
pub use epoch::Epoch;
pub use epoch_key::EpochKey;
pub use health::Health;
pub use init::Init;
pub use version::Version;
