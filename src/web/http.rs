//! HTTP 请求封装模块
//!
//! 使用 `web_sys::fetch` 实现 `Transport`，替代 `gloo-net`。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

use crate::api::transport::{CredentialsMode, HttpRequest, HttpResponse, Transport};
use crate::error::ApiError;

impl From<CredentialsMode> for RequestCredentials {
    fn from(mode: CredentialsMode) -> Self {
        match mode {
            CredentialsMode::SameOrigin => RequestCredentials::SameOrigin,
            CredentialsMode::Include => RequestCredentials::Include,
        }
    }
}

/// 基于浏览器 fetch 的传输层
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    fn build(req: &HttpRequest) -> Result<Request, ApiError> {
        let headers = Headers::new()
            .map_err(|e| ApiError::RequestBuild(format!("创建 Headers 失败: {:?}", e)))?;

        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| ApiError::RequestBuild(format!("设置 Header 失败: {:?}", e)))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_credentials(req.credentials.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts)
            .map_err(|e| ApiError::RequestBuild(format!("{:?}", e)))
    }

    async fn text(resp: &Response) -> Result<String, ApiError> {
        let promise = resp
            .text()
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ApiError::Decode(format!("{:?}", e)))?;

        text.as_string()
            .ok_or_else(|| ApiError::Decode("响应体无法转换为字符串".to_string()))
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let request = Self::build(req)?;

        let window = web_sys::window()
            .ok_or_else(|| ApiError::Network("无法获取 window 对象".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        let resp: Response = resp_value
            .dyn_into()
            .map_err(|e| ApiError::Decode(format!("Response 类型转换失败: {:?}", e)))?;

        let body = Self::text(&resp).await?;

        Ok(HttpResponse {
            status: resp.status(),
            body,
        })
    }
}
