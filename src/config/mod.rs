pub mod schema;

pub use schema::{
    Config, MAX_HISTORY_LIMIT, ObservabilityConfig, PacketConfig, PlaygroundConfig, StoreConfig,
};
