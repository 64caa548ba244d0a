mod core;
mod observability;
mod packet;
mod playground;
mod store;

pub use self::core::Config;
pub use observability::ObservabilityConfig;
pub use packet::PacketConfig;
pub use playground::PlaygroundConfig;
pub use store::{MAX_HISTORY_LIMIT, StoreConfig};
