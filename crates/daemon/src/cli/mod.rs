pub mod args;
pub mod op;
pub mod ops;

pub use ops::{Daemon, DecryptionKey, EonKey, Epoch, EpochKey, Health, Init, Version};
