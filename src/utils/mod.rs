mod config;
mod frame_limit;
mod patterns;

pub use config::{Config, EngineConfig};
pub use frame_limit::FrameLimiter;
pub use patterns::{Pattern, UnknownPattern};
