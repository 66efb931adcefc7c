pub mod achievement_unlock;
pub mod admin_adjust;
pub mod challenge_create;
pub mod challenge_expire;
pub mod challenge_respond;
pub mod config_update;
pub mod daily_claim;
pub mod deposit_settle;
pub mod initialize;
pub mod item_purchase;
pub mod player_register;
pub mod raffle_draw;
pub mod shop_admin;
pub mod spend;
pub mod withdraw_cancel;
pub mod withdraw_request;
pub mod withdraw_settle;

pub use achievement_unlock::*;
pub use admin_adjust::*;
pub use challenge_create::*;
pub use challenge_expire::*;
pub use challenge_respond::*;
pub use config_update::*;
pub use daily_claim::*;
pub use deposit_settle::*;
pub use initialize::*;
pub use item_purchase::*;
pub use player_register::*;
pub use raffle_draw::*;
pub use shop_admin::*;
pub use spend::*;
pub use withdraw_cancel::*;
pub use withdraw_request::*;
pub use withdraw_settle::*;
