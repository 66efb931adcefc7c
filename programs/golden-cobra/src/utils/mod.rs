pub mod achievements;
pub mod ledger;
pub mod random;
pub mod rank;

pub use ledger::*;
pub use random::*;
pub use rank::*;
