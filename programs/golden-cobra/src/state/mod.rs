pub mod challenge;
pub mod config;
pub mod fund;
pub mod player;
pub mod receipts;
pub mod shop;
pub mod withdrawal;

pub use challenge::*;
pub use config::*;
pub use fund::*;
pub use player::*;
pub use receipts::*;
pub use shop::*;
pub use withdrawal::*;
