//! 拦截器管道
//!
//! 每个请求都经过同一条有序管道：
//! 出站拦截器按注册顺序执行，入站拦截器按相反顺序执行。

use std::sync::Arc;

use super::transport::{CredentialsMode, HttpRequest, HttpResponse, Transport};
use crate::error::{ApiError, is_auth_failure_status};

/// 请求 / 响应拦截器
pub trait Interceptor: Send + Sync {
    /// 出站：修改即将发送的请求
    fn on_request(&self, _req: &mut HttpRequest) {}

    /// 入站：观察请求结果，不修改结果
    fn on_response(&self, _req: &HttpRequest, _outcome: &Result<HttpResponse, ApiError>) {}
}

/// 为每个出站请求附带浏览器凭据（会话 Cookie）
#[derive(Debug, Clone, Copy, Default)]
pub struct CredentialInterceptor;

impl Interceptor for CredentialInterceptor {
    fn on_request(&self, req: &mut HttpRequest) {
        req.credentials = CredentialsMode::Include;
    }
}

/// 鉴权失败 (401/403) 时触发全局回调，结果原样向下传递
pub struct ErrorInterceptor {
    on_auth_failure: Box<dyn Fn(u16) + Send + Sync>,
}

impl ErrorInterceptor {
    pub fn new(on_auth_failure: impl Fn(u16) + Send + Sync + 'static) -> Self {
        Self {
            on_auth_failure: Box::new(on_auth_failure),
        }
    }
}

impl Interceptor for ErrorInterceptor {
    fn on_response(&self, req: &HttpRequest, outcome: &Result<HttpResponse, ApiError>) {
        if let Ok(resp) = outcome {
            if is_auth_failure_status(resp.status) {
                log::warn!(
                    "[Http] {} {} rejected with {}",
                    req.method.as_str(),
                    req.url,
                    resp.status
                );
                (self.on_auth_failure)(resp.status);
            }
        }
    }
}

/// 传输层 + 有序拦截器列表
#[derive(Clone)]
pub struct HttpPipeline {
    transport: Arc<dyn Transport>,
    interceptors: Vec<Arc<dyn Interceptor>>,
}

impl HttpPipeline {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            interceptors: Vec::new(),
        }
    }

    /// 追加一个拦截器（位于已注册拦截器之后）
    pub fn with(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    pub async fn send(&self, mut req: HttpRequest) -> Result<HttpResponse, ApiError> {
        for interceptor in &self.interceptors {
            interceptor.on_request(&mut req);
        }

        let outcome = self.transport.send(&req).await;

        for interceptor in self.interceptors.iter().rev() {
            interceptor.on_response(&req, &outcome);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::transport::mock::MockTransport;
    use ship_tracker_shared::protocol::HttpMethod;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    }

    impl Interceptor for Recorder {
        fn on_request(&self, req: &mut HttpRequest) {
            self.log.lock().unwrap().push(format!("out:{}", self.name));
            req.headers.push(("X-Trace".into(), self.name.into()));
        }

        fn on_response(&self, _req: &HttpRequest, _outcome: &Result<HttpResponse, ApiError>) {
            self.log.lock().unwrap().push(format!("in:{}", self.name));
        }
    }

    #[tokio::test]
    async fn interceptors_wrap_transport_in_order() {
        let transport = MockTransport::new();
        let log = Arc::new(Mutex::new(Vec::new()));
        let pipeline = HttpPipeline::new(transport.clone())
            .with(Recorder {
                name: "a",
                log: log.clone(),
            })
            .with(Recorder {
                name: "b",
                log: log.clone(),
            });

        pipeline
            .send(HttpRequest::new(HttpMethod::Get, "/api/ships"))
            .await
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["out:a", "out:b", "in:b", "in:a"]);
        let sent = &transport.requests()[0];
        assert_eq!(
            sent.headers,
            vec![
                ("X-Trace".to_string(), "a".to_string()),
                ("X-Trace".to_string(), "b".to_string())
            ]
        );
    }

    #[tokio::test]
    async fn credential_interceptor_includes_cookies() {
        let transport = MockTransport::new();
        let pipeline = HttpPipeline::new(transport.clone()).with(CredentialInterceptor);

        pipeline
            .send(HttpRequest::new(HttpMethod::Get, "/api/auth/me"))
            .await
            .unwrap();

        assert_eq!(transport.requests()[0].credentials, CredentialsMode::Include);
    }

    #[tokio::test]
    async fn error_interceptor_fires_on_auth_failures_only() {
        let transport = MockTransport::new();
        transport.respond(401, "");
        transport.respond(500, "boom");
        transport.respond(403, "");
        transport.fail(ApiError::Network("offline".into()));

        let hits = Arc::new(AtomicUsize::new(0));
        let counter = hits.clone();
        let pipeline = HttpPipeline::new(transport.clone()).with(ErrorInterceptor::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        let first = pipeline
            .send(HttpRequest::new(HttpMethod::Get, "/api/ships"))
            .await;
        assert_eq!(first, Ok(HttpResponse::new(401, "")));

        let second = pipeline
            .send(HttpRequest::new(HttpMethod::Get, "/api/ships"))
            .await;
        assert_eq!(second, Ok(HttpResponse::new(500, "boom")));

        let _ = pipeline
            .send(HttpRequest::new(HttpMethod::Get, "/api/ships/1"))
            .await;
        let fourth = pipeline
            .send(HttpRequest::new(HttpMethod::Get, "/api/ships/1"))
            .await;
        assert_eq!(fourth, Err(ApiError::Network("offline".into())));

        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
