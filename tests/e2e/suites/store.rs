//! 商店接口测试套件
//!
//! 订单写入后在演示服务上存在可见性延迟，读取和删除都通过轮询确认。

use anyhow::Result;
use petstore_data::{Inventory, Order};
use petstore_shared::PollPolicy;
use rstest::rstest;

use crate::helpers::*;
use crate::setup::{TestEnvironment, test_env};
use crate::{assert_status, assert_status_in};

/// 订单 CRUD 测试
#[cfg(test)]
mod order_crud_tests {
    use super::*;

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_create_order_success(mut test_env: TestEnvironment) -> Result<()> {
        let order = test_env.data.order().build();
        let resp = test_env.api.create_store_order(&order).await?;

        assert_status!(resp, 200);
        let created = json_body(&resp);
        assert_eq!(assert_int_field(&created, "id"), order.id);
        assert_eq!(assert_int_field(&created, "petId"), order.pet_id);
        assert_eq!(assert_int_field(&created, "quantity"), i64::from(order.quantity));
        if let Some(complete) = created.get("complete") {
            assert!(complete.is_boolean(), "complete 应为布尔值: {complete}");
        }
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_get_existing_order(mut test_env: TestEnvironment) -> Result<()> {
        let order = test_env.data.order().build();
        let created = test_env.api.create_store_order(&order).await?;
        assert_status!(created, 200);
        let order_id = created.json::<Order>()?.id;

        let policy = test_env.poll_policy();
        let api = &test_env.api;
        let outcome = test_env
            .wait_for_status("get_store_order", &policy, 200, || {
                api.get_store_order(order_id)
            })
            .await?;

        assert!(
            outcome.satisfied,
            "{} 次尝试后仍未读到订单 {order_id}，最后响应: {}",
            outcome.attempts,
            outcome.value.text()
        );
        let fetched = json_body(&outcome.value);
        assert_eq!(assert_int_field(&fetched, "id"), order_id);
        assert_int_field(&fetched, "petId");
        assert_int_field(&fetched, "quantity");
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_get_nonexistent_order(test_env: TestEnvironment) -> Result<()> {
        let resp = test_env.api.get_store_order(999_999_999).await?;
        assert_status!(resp, 404);
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_delete_order_success(mut test_env: TestEnvironment) -> Result<()> {
        let order = test_env.data.order().build();
        let created = test_env.api.create_store_order(&order).await?;
        assert_status!(created, 200);
        let order_id = created.json::<Order>()?.id;

        let policy = PollPolicy::extended();
        let api = &test_env.api;

        test_env
            .wait_for_status("get_order_before_delete", &policy, 200, || {
                api.get_store_order(order_id)
            })
            .await?;
        let deleted = test_env
            .wait_for_status("delete_store_order", &policy, 200, || {
                api.delete_store_order(order_id)
            })
            .await?;
        assert_status!(deleted.value, 200);

        let gone = test_env
            .wait_for_status("get_order_after_delete", &policy, 404, || {
                api.get_store_order(order_id)
            })
            .await?;
        assert!(gone.satisfied, "订单 {order_id} 删除后仍然存在");
        Ok(())
    }
}

/// 边界值与非法数据测试
#[cfg(test)]
mod order_input_tests {
    use super::*;

    #[rstest]
    #[case::zero_quantity(0)]
    #[case::negative_quantity(-1)]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_create_order_with_boundary_quantity(
        mut test_env: TestEnvironment,
        #[case] quantity: i32,
    ) -> Result<()> {
        let order = test_env.data.order().quantity(quantity).build();
        let resp = test_env.api.create_store_order(&order).await?;
        assert_status!(resp, 200);
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_create_order_with_invalid_status(mut test_env: TestEnvironment) -> Result<()> {
        let order = test_env.data.order().status("invalid_status").build();
        let resp = test_env.api.create_store_order(&order).await?;
        assert_status!(resp, 200);
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_create_order_with_invalid_id_type(mut test_env: TestEnvironment) -> Result<()> {
        let mut payload = serde_json::to_value(test_env.data.order().build())?;
        payload["id"] = "not_a_number".into();

        let resp = test_env.api.create_store_order(&payload).await?;
        assert_status!(resp, 500);
        Ok(())
    }
}

/// 幂等性测试
#[cfg(test)]
mod order_idempotency_tests {
    use super::*;

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_create_order_idempotency(mut test_env: TestEnvironment) -> Result<()> {
        let order = test_env.data.order().build();

        let first = test_env.api.create_store_order(&order).await?;
        assert_status!(first, 200);
        let second = test_env.api.create_store_order(&order).await?;
        assert_status!(second, 200);

        assert_eq!(first.json::<Order>()?.id, second.json::<Order>()?.id);
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_delete_order_idempotency(mut test_env: TestEnvironment) -> Result<()> {
        let order = test_env.data.order().build();
        let created = test_env.api.create_store_order(&order).await?;
        assert_status!(created, 200);
        let order_id = created.json::<Order>()?.id;

        let policy = test_env.poll_policy();
        let api = &test_env.api;

        test_env
            .wait_for_status("get_order_before_delete", &policy, 200, || {
                api.get_store_order(order_id)
            })
            .await?;
        let first = test_env
            .wait_for_status("delete_store_order", &policy, 200, || {
                api.delete_store_order(order_id)
            })
            .await?;
        assert_status!(first.value, 200);

        let second = test_env.api.delete_store_order(order_id).await?;
        assert_status!(second, 404);
        Ok(())
    }
}

/// 库存、ID 唯一性与响应时间
#[cfg(test)]
mod store_advanced_tests {
    use super::*;

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_get_inventory(test_env: TestEnvironment) -> Result<()> {
        let resp = test_env.api.get_store_inventory().await?;
        assert_status!(resp, 200);

        // 反序列化即校验数量为整数
        let inventory: Inventory = resp.json()?;
        for (status, count) in &inventory {
            assert!(*count >= 0, "状态 {status} 的库存为负数: {count}");
        }
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_order_id_uniqueness(mut test_env: TestEnvironment) -> Result<()> {
        let order_id = test_env.data.order().build().id;

        let first = test_env.data.order().id(order_id).pet_id(1).build();
        assert_status!(test_env.api.create_store_order(&first).await?, 200);

        let second = test_env.data.order().id(order_id).pet_id(2).build();
        assert_status!(test_env.api.create_store_order(&second).await?, 200);
        Ok(())
    }

    #[rstest]
    #[tokio::test]
    #[ignore = "需要访问 Petstore 服务"]
    async fn test_create_order_performance(mut test_env: TestEnvironment) -> Result<()> {
        let order = test_env.data.order().build();
        let resp = test_env.api.create_store_order(&order).await?;

        assert_status_in!(resp, [200]);
        assert_within(&resp, CREATE_LATENCY_LIMIT);
        Ok(())
    }
}
