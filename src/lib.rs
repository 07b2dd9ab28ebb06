//! Petstore 端到端测试工作区
//!
//! 根包只承载 `tests/e2e`，这里统一导出各成员 crate，便于外部按单一依赖引用。

pub use petstore_client as client;
pub use petstore_data as data;
pub use petstore_shared as shared;
