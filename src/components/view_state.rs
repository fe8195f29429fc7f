//! 视图局部状态
//!
//! 每个视图持有一份 `ViewState`，只在下列重置点改变：
//! `begin`（发起请求）、`succeed`（成功）、`fail`（失败并重新启用表单）。

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub loading: bool,
    pub error: Option<String>,
}

impl ViewState {
    /// 挂载即加载的视图使用此初始状态
    pub fn loading() -> Self {
        Self {
            loading: true,
            error: None,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn succeed(&mut self) {
        self.loading = false;
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }
}
