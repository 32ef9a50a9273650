pub mod config;
pub mod discovery;
pub mod gateway;
pub mod named_map;
pub mod plugin;
pub mod route;


pub use config::*;
pub use discovery::*;
pub use gateway::*;
pub use named_map::NamedMap;
pub use plugin::*;
pub use route::*;
