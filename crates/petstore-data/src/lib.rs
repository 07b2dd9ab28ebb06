//! Petstore 测试数据
//!
//! 提供资源模型、带种子的负载生成器，以及 `petstore-data` 命令行工具的实现。

pub mod cli;
pub mod generators;
pub mod models;

pub use generators::DataGenerator;
pub use models::{Category, Inventory, Order, Pet, PetStatus, Tag, User};
