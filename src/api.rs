use std::sync::Arc;

use ship_tracker_shared::protocol::ApiRequest;

use crate::error::ApiError;

pub mod location_report;
pub mod pipeline;
pub mod ship;
pub mod transport;

pub use location_report::LocationReportClient;
pub use pipeline::{CredentialInterceptor, ErrorInterceptor, HttpPipeline};
pub use ship::ShipClient;

use transport::HttpRequest;

/// 类型化 API 客户端
///
/// 所有资源客户端共享同一个实例（同一条拦截器管道）。
#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    pipeline: Arc<HttpPipeline>,
}

impl ApiClient {
    pub fn new(base_url: &str, pipeline: HttpPipeline) -> Self {
        let base_url = base_url.trim_end_matches('/');
        Self {
            base_url: Arc::from(base_url),
            pipeline: Arc::new(pipeline),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 发送一个端点请求并解析响应
    ///
    /// 非 2xx 状态码映射为 `ApiError::Status`。
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let mut http = HttpRequest::new(R::METHOD, self.url(&request.path()));
        let body = request
            .body()
            .map_err(|e| ApiError::RequestBuild(e.to_string()))?;
        if let Some(body) = body {
            http = http.with_json_body(body);
        }

        log::debug!("[Api] {} {}", R::METHOD.as_str(), http.url);
        let resp = self.pipeline.send(http).await?;

        if !resp.ok() {
            return Err(ApiError::Status {
                status: resp.status,
                message: resp.body,
            });
        }

        resp.json::<R::Response>()
    }
}
