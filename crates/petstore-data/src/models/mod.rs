//! 数据模型
//!
//! Petstore 三类资源（宠物、订单、用户）的 JSON 结构。

pub mod order;
pub mod pet;
pub mod user;

pub use order::{DEFAULT_ORDER_STATUS, Order};
pub use pet::{Category, Pet, PetStatus, Tag};
pub use user::User;

/// 库存：状态名 -> 数量
pub type Inventory = std::collections::BTreeMap<String, i64>;
