pub mod blocks;
pub mod guidelines;
pub mod lint;
pub mod packet;
pub mod playground;
pub mod store;
