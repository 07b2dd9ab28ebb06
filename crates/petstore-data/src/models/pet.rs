//! 宠物模型
//!
//! 与 Petstore `/pet` 接口的 JSON 结构一一对应。反序列化时缺失的字段取默认值，
//! 便于直接解析远端返回的不完整记录。

use serde::{Deserialize, Serialize};

/// 宠物分类
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// 宠物标签
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

/// 宠物
///
/// `status` 保持为字符串：边界测试需要发送不在枚举内的状态值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub category: Category,
    pub tags: Vec<Tag>,
    pub photo_urls: Vec<String>,
}

/// 宠物销售状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Sold,
}

impl PetStatus {
    /// 全部合法状态
    pub const ALL: [PetStatus; 3] = [Self::Available, Self::Pending, Self::Sold];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Pending => "pending",
            Self::Sold => "sold",
        }
    }

    /// 从字符串解析，未知状态返回 None
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl std::fmt::Display for PetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Pet {
    /// 状态是否为合法枚举值
    pub fn has_known_status(&self) -> bool {
        PetStatus::parse(&self.status).is_some()
    }
}
