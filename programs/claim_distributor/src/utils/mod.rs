pub mod merkle;
pub mod message;
pub mod signature;
pub mod token;

pub use merkle::*;
pub use message::*;
pub use signature::*;
pub use token::*;
