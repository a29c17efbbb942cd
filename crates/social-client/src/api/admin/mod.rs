//! Admin API surface (`/admin/*`): parallel CRUD screens over the same
//! request client and bearer session.

pub mod auth;
pub mod goods;
pub mod misc;
pub mod redeem_orders;
pub mod task_defs;
pub mod tournaments;
pub mod users;
