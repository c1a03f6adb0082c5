pub mod entities;
pub mod ports;
pub mod resolver;
pub mod services;

pub use entities::*;
pub use ports::*;
