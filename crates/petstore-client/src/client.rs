//! Petstore REST API 客户端
//!
//! 每个方法对应一个 REST 动作，只负责发出一次请求并原样返回响应；
//! 不解释状态码，不重试，不反序列化。

use std::io;
use std::path::Path;
use std::time::Duration;

use petstore_shared::config::{DEFAULT_BASE_URL, PetstoreConfig};
use petstore_shared::{PetstoreError, Result};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::Serialize;
use tokio::time::Instant;
use tracing::{debug, warn};

use crate::response::ApiResponse;

/// API 客户端
///
/// 内部持有一个 `reqwest::Client`，同一实例的请求复用连接。
#[derive(Debug, Clone)]
pub struct PetstoreClient {
    client: Client,
    base_url: String,
}

impl PetstoreClient {
    /// 创建客户端，未指定地址时使用公共演示服务
    pub fn new(base_url: Option<&str>) -> Result<Self> {
        Self::with_timeout(base_url, None)
    }

    /// 按配置创建客户端
    pub fn from_config(config: &PetstoreConfig) -> Result<Self> {
        Self::with_timeout(Some(&config.base_url), config.request_timeout())
    }

    /// 创建客户端并指定请求超时；`None` 表示沿用 HTTP 客户端默认行为
    pub fn with_timeout(base_url: Option<&str>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = base_url
            .unwrap_or(DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();

        Url::parse(&base_url).map_err(|e| PetstoreError::InvalidBaseUrl {
            url: base_url.clone(),
            message: e.to_string(),
        })?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========== Pet API ==========

    /// 获取宠物
    pub async fn get_pet(&self, pet_id: i64) -> Result<ApiResponse> {
        self.send("get_pet", self.client.get(self.url(&format!("/pet/{}", pet_id))))
            .await
    }

    /// 创建宠物
    pub async fn create_pet<T: Serialize + ?Sized>(&self, pet: &T) -> Result<ApiResponse> {
        self.send("create_pet", self.client.post(self.url("/pet")).json(pet))
            .await
    }

    /// 更新宠物（整体替换）
    pub async fn update_pet<T: Serialize + ?Sized>(&self, pet: &T) -> Result<ApiResponse> {
        self.send("update_pet", self.client.put(self.url("/pet")).json(pet))
            .await
    }

    /// 删除宠物
    pub async fn delete_pet(&self, pet_id: i64) -> Result<ApiResponse> {
        self.send(
            "delete_pet",
            self.client.delete(self.url(&format!("/pet/{}", pet_id))),
        )
        .await
    }

    /// 按状态查询宠物（available, pending, sold）
    pub async fn find_pets_by_status(&self, status: &str) -> Result<ApiResponse> {
        self.send(
            "find_pets_by_status",
            self.client
                .get(self.url("/pet/findByStatus"))
                .query(&[("status", status)]),
        )
        .await
    }

    /// 按标签查询宠物，多个标签以逗号拼接
    pub async fn find_pets_by_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<ApiResponse> {
        let joined = tags.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
        self.send(
            "find_pets_by_tags",
            self.client
                .get(self.url("/pet/findByTags"))
                .query(&[("tags", joined)]),
        )
        .await
    }

    /// 通过表单更新宠物名称和状态，只提交给定的字段
    pub async fn update_pet_with_form(
        &self,
        pet_id: i64,
        name: Option<&str>,
        status: Option<&str>,
    ) -> Result<ApiResponse> {
        let fields: Vec<(&str, &str)> = [("name", name), ("status", status)]
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect();

        self.send(
            "update_pet_with_form",
            self.client
                .post(self.url(&format!("/pet/{}", pet_id)))
                .form(&fields),
        )
        .await
    }

    /// 上传宠物图片
    ///
    /// 有文件时以 multipart 发送；文件不存在时不视为错误，记录警告后
    /// 退回表单编码，只提交 `additionalMetadata`，两者都没有时不带请求体。
    pub async fn upload_pet_image(
        &self,
        pet_id: i64,
        file_path: Option<&Path>,
        additional_metadata: Option<&str>,
    ) -> Result<ApiResponse> {
        let file_part = match file_path {
            Some(path) => match tokio::fs::read(path).await {
                Ok(content) => {
                    let file_name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| "upload.bin".to_string());
                    Some(
                        Part::bytes(content)
                            .file_name(file_name)
                            .mime_str("application/octet-stream")?,
                    )
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    warn!(pet_id, path = %path.display(), "图片文件不存在，改为不带文件上传");
                    None
                }
                Err(err) => return Err(err.into()),
            },
            None => None,
        };

        let request = self
            .client
            .post(self.url(&format!("/pet/{}/uploadImage", pet_id)));
        let request = match (file_part, additional_metadata) {
            (Some(part), metadata) => {
                let mut form = Form::new();
                if let Some(metadata) = metadata {
                    form = form.text("additionalMetadata", metadata.to_string());
                }
                request.multipart(form.part("file", part))
            }
            (None, Some(metadata)) => request.form(&[("additionalMetadata", metadata)]),
            (None, None) => request,
        };

        self.send("upload_pet_image", request).await
    }

    // ========== Store API ==========

    /// 获取库存（状态名 -> 数量）
    pub async fn get_store_inventory(&self) -> Result<ApiResponse> {
        self.send(
            "get_store_inventory",
            self.client.get(self.url("/store/inventory")),
        )
        .await
    }

    /// 创建订单
    pub async fn create_store_order<T: Serialize + ?Sized>(&self, order: &T) -> Result<ApiResponse> {
        self.send(
            "create_store_order",
            self.client.post(self.url("/store/order")).json(order),
        )
        .await
    }

    /// 获取订单
    pub async fn get_store_order(&self, order_id: i64) -> Result<ApiResponse> {
        self.send(
            "get_store_order",
            self.client
                .get(self.url(&format!("/store/order/{}", order_id))),
        )
        .await
    }

    /// 删除订单
    pub async fn delete_store_order(&self, order_id: i64) -> Result<ApiResponse> {
        self.send(
            "delete_store_order",
            self.client
                .delete(self.url(&format!("/store/order/{}", order_id))),
        )
        .await
    }

    // ========== User API ==========

    /// 创建用户
    pub async fn create_user<T: Serialize + ?Sized>(&self, user: &T) -> Result<ApiResponse> {
        self.send("create_user", self.client.post(self.url("/user")).json(user))
            .await
    }

    /// 以数组形式批量创建用户
    pub async fn create_users_with_array<T: Serialize + ?Sized>(
        &self,
        users: &T,
    ) -> Result<ApiResponse> {
        self.send(
            "create_users_with_array",
            self.client
                .post(self.url("/user/createWithArray"))
                .json(users),
        )
        .await
    }

    /// 以列表形式批量创建用户
    pub async fn create_users_with_list<T: Serialize + ?Sized>(
        &self,
        users: &T,
    ) -> Result<ApiResponse> {
        self.send(
            "create_users_with_list",
            self.client
                .post(self.url("/user/createWithList"))
                .json(users),
        )
        .await
    }

    /// 获取用户
    pub async fn get_user(&self, username: &str) -> Result<ApiResponse> {
        self.send(
            "get_user",
            self.client.get(self.url(&format!("/user/{}", username))),
        )
        .await
    }

    /// 更新用户
    pub async fn update_user<T: Serialize + ?Sized>(
        &self,
        username: &str,
        user: &T,
    ) -> Result<ApiResponse> {
        self.send(
            "update_user",
            self.client
                .put(self.url(&format!("/user/{}", username)))
                .json(user),
        )
        .await
    }

    /// 删除用户
    pub async fn delete_user(&self, username: &str) -> Result<ApiResponse> {
        self.send(
            "delete_user",
            self.client.delete(self.url(&format!("/user/{}", username))),
        )
        .await
    }

    /// 登录
    pub async fn login_user(&self, username: &str, password: &str) -> Result<ApiResponse> {
        self.send(
            "login_user",
            self.client
                .get(self.url("/user/login"))
                .query(&[("username", username), ("password", password)]),
        )
        .await
    }

    /// 登出
    pub async fn logout_user(&self) -> Result<ApiResponse> {
        self.send("logout_user", self.client.get(self.url("/user/logout")))
            .await
    }

    // ========== 通用请求 ==========

    /// 对任意路径发出不带请求体的请求，用于构造非法路径等边界场景
    pub async fn send_raw(&self, method: Method, path: &str) -> Result<ApiResponse> {
        self.send("send_raw", self.client.request(method, self.url(path)))
            .await
    }

    // ========== 内部方法 ==========

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, operation: &'static str, request: RequestBuilder) -> Result<ApiResponse> {
        let started = Instant::now();
        let resp = request.send().await.inspect_err(|e| {
            warn!(operation, error = %e, "请求发送失败");
        })?;
        let response = ApiResponse::read(resp, started).await?;

        debug!(
            operation,
            url = response.url(),
            status = response.status_code(),
            elapsed_ms = response.elapsed().as_millis() as u64,
            "请求完成"
        );

        Ok(response)
    }
}
