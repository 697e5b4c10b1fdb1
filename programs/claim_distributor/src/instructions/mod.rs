pub mod create_distributor;
pub mod claim;
pub mod claim_with_signature;
pub mod view;

pub use create_distributor::*;
pub use claim::*;
pub use claim_with_signature::*;
pub use view::*;
