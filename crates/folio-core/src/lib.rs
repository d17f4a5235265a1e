pub mod config;
pub mod constants;
pub mod content;
pub mod context;
pub mod cursor;
pub mod gate;
pub mod layout;
pub mod mapper;
pub mod player;
pub mod progress;
pub mod sections;
pub mod sequencer;
pub mod spring;
pub mod store;
pub mod subscription;

pub use config::*;
pub use context::*;
pub use gate::*;
pub use layout::*;
pub use mapper::*;
pub use progress::*;
pub use sequencer::*;
pub use spring::*;
pub use store::*;
pub use subscription::*;
