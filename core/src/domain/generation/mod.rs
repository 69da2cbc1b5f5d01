pub mod entities;
pub mod errors;
pub mod extraction;
pub mod ports;
pub mod prompts;
pub mod services;
pub mod shape;
pub mod value_objects;

pub use entities::*;
pub use errors::GenerationError;
pub use ports::*;
pub use value_objects::*;
