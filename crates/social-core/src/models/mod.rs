//! Wire models for the GameSocial backend.
//!
//! All types mirror the backend JSON shapes (camelCase keys). Unknown fields
//! are ignored on deserialization so the client tolerates backend additions;
//! domain objects are transient UI-bound values with no client-side
//! invariants.

pub mod goods;
pub mod media;
pub mod page;
pub mod points;
pub mod redeem;
pub mod task;
pub mod tournament;
pub mod user;
pub mod vip;

pub use goods::{Goods, GoodsInput};
pub use media::UploadResult;
pub use page::{items_from, PageQuery};
pub use points::{LedgerEntry, PointsAdjustRequest, PointsBalance};
pub use redeem::{CreateOrderItem, CreateOrderRequest, RedeemOrder, RedeemOrderItem};
pub use task::{TaskDef, TaskDefInput};
pub use tournament::{
    JoinedTournament, Tournament, TournamentInput, TournamentResultItem, TournamentResults,
};
pub use user::{AdminUserUpdate, LoginResult, UpdateProfileRequest, UserProfile};
pub use vip::VipStatus;
