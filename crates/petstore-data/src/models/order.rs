//! 订单模型

use serde::{Deserialize, Serialize};

/// 订单默认状态
pub const DEFAULT_ORDER_STATUS: &str = "placed";

/// 商店订单
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    pub pet_id: i64,
    pub quantity: i32,
    pub status: String,
    pub complete: bool,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            id: 0,
            pet_id: 0,
            quantity: 0,
            status: DEFAULT_ORDER_STATUS.to_string(),
            complete: false,
        }
    }
}
