//! Petstore API 客户端
//!
//! 把 Petstore REST API 的每个动作映射为一个异步方法，返回完整读取的
//! [`ApiResponse`]，由测试自行断言状态码和响应体。
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use petstore_client::PetstoreClient;
//!
//! # async fn demo() -> petstore_shared::Result<()> {
//! let client = PetstoreClient::new(None)?;
//! let resp = client.get_pet(123456).await?;
//! assert!(resp.status_in(&[200, 404]));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod response;

pub use client::PetstoreClient;
pub use response::ApiResponse;
pub use reqwest::Method;
