//! 生成器取值池
//!
//! 固定的候选集合，生成的宠物名称、分类和标签都从这里抽取。

use crate::models::PetStatus;

/// 宠物名称池
pub const PET_NAMES: &[&str] = &[
    "Buddy", "Max", "Charlie", "Cooper", "Rocky", "Bear", "Duke", "Luna", "Bella", "Lucy",
    "Daisy", "Molly", "Sadie", "Maggie",
];

/// 分类池 (id, name)
pub const CATEGORIES: &[(i64, &str)] = &[(1, "Dogs"), (2, "Cats"), (3, "Birds"), (4, "Fish")];

/// 标签池 (id, name)
pub const TAGS: &[(i64, &str)] = &[
    (1, "friendly"),
    (2, "playful"),
    (3, "loyal"),
    (4, "active"),
    (5, "calm"),
];

/// 状态池
pub const STATUSES: &[PetStatus] = &PetStatus::ALL;

/// 生成宠物、订单和用户 ID 的范围
pub const ID_RANGE: std::ops::RangeInclusive<i64> = 100_000..=999_999;

/// 订单关联宠物 ID 的范围
pub const ORDER_PET_ID_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

/// 订单数量范围
pub const ORDER_QUANTITY_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

/// 每只宠物的标签数量范围
pub const TAG_COUNT_RANGE: std::ops::RangeInclusive<usize> = 1..=3;

/// 照片地址前缀
pub const PHOTO_URL_BASE: &str = "https://example.com/photos";
