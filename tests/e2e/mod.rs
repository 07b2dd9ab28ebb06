//! Petstore 端到端测试
//!
//! 针对真实 Petstore 服务运行，覆盖：
//! - 宠物 CRUD、边界值、非法数据、幂等性、ID 唯一性
//! - 商店订单与库存
//! - 用户 CRUD、登录登出
//! - 创建请求的响应时间
//!
//! 所有用例默认忽略，需要可访问的服务：
//!
//! ```bash
//! PETSTORE_BASE_URL=http://localhost:8080/v2 cargo test --test e2e -- --ignored
//! ```

pub mod helpers;
pub mod suites;

pub use setup::TestEnvironment;
