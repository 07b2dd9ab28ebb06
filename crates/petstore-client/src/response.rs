//! 响应封装
//!
//! 一次性读完响应体，之后可以反复查看状态码、响应头和正文，
//! 断言失败时也能把原始正文打印出来。

use std::time::Duration;

use petstore_shared::Result;
use reqwest::StatusCode;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::de::DeserializeOwned;

/// 远端服务的原始响应
#[derive(Debug, Clone)]
pub struct ApiResponse {
    url: String,
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    elapsed: Duration,
}

impl ApiResponse {
    /// 读取完整响应体
    pub(crate) async fn read(resp: reqwest::Response, started: tokio::time::Instant) -> Result<Self> {
        let url = resp.url().to_string();
        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?.to_vec();

        Ok(Self {
            url,
            status,
            headers,
            body,
            elapsed: started.elapsed(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// 数字形式的状态码
    pub fn status_code(&self) -> u16 {
        self.status.as_u16()
    }

    /// 状态码是否属于期望集合
    pub fn status_in(&self, expected: &[u16]) -> bool {
        expected.contains(&self.status_code())
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// 读取单个响应头，非 ASCII 值视为不存在
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn content_type(&self) -> Option<&str> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Content-Type 是否为 application/json
    pub fn is_json(&self) -> bool {
        self.content_type()
            .is_some_and(|ct| ct.starts_with("application/json"))
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// 正文文本（非 UTF-8 字节会被替换）
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// 按 JSON 反序列化正文
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// 按无类型 JSON 解析正文
    pub fn json_value(&self) -> Result<serde_json::Value> {
        self.json()
    }

    /// 从发送请求到读完响应体的耗时
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[cfg(test)]
    pub(crate) fn stub(status: u16, content_type: &str, body: &str) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, content_type.parse().unwrap());
        Self {
            url: "http://localhost/stub".to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            headers,
            body: body.as_bytes().to_vec(),
            elapsed: Duration::from_millis(1),
        }
    }
}
