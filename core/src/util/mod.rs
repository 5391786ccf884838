pub mod text;
pub mod time;

mod ring_bytes;
pub use ring_bytes::RingBytes;
