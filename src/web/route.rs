//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use std::fmt::Display;

use ship_tracker_shared::ShipId;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,
    /// 船舶列表 (需要认证)
    ShipList,
    /// 新建船舶 (需要认证)
    ShipNew,
    /// 编辑船舶 (需要认证)
    ShipEdit(ShipId),
    /// 船舶详情与位置时间线 (需要认证)
    ShipDetail(ShipId),
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    ///
    /// `/` 解析为登录页，导航时会被替换为 `/login`。
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] | ["login"] => Self::Login,
            ["ships"] => Self::ShipList,
            ["ships", "new"] => Self::ShipNew,
            ["ships", id] => parse_id(id).map_or(Self::NotFound, Self::ShipDetail),
            ["ships", id, "edit"] => parse_id(id).map_or(Self::NotFound, Self::ShipEdit),
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/login".to_string(),
            Self::ShipList => "/ships".to_string(),
            Self::ShipNew => "/ships/new".to_string(),
            Self::ShipEdit(id) => format!("/ships/{}/edit", id),
            Self::ShipDetail(id) => format!("/ships/{}", id),
            Self::NotFound => "/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::ShipList | Self::ShipNew | Self::ShipEdit(_) | Self::ShipDetail(_)
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（从登录页）
    pub fn auth_success_redirect() -> Self {
        Self::ShipList
    }
}

fn parse_id(segment: &str) -> Option<ShipId> {
    segment.parse::<ShipId>().ok().filter(|id| *id > 0)
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_client_route() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
        assert_eq!(AppRoute::from_path("/ships"), AppRoute::ShipList);
        assert_eq!(AppRoute::from_path("/ships/"), AppRoute::ShipList);
        assert_eq!(AppRoute::from_path("/ships/new"), AppRoute::ShipNew);
        assert_eq!(AppRoute::from_path("/ships/7"), AppRoute::ShipDetail(7));
        assert_eq!(AppRoute::from_path("/ships/7/edit"), AppRoute::ShipEdit(7));
    }

    #[test]
    fn malformed_paths_are_not_found() {
        assert_eq!(AppRoute::from_path("/ships/abc"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/ships/-3/edit"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/ships/7/delete"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::NotFound);
    }

    #[test]
    fn paths_round_trip_for_navigable_routes() {
        for route in [
            AppRoute::Login,
            AppRoute::ShipList,
            AppRoute::ShipNew,
            AppRoute::ShipEdit(12),
            AppRoute::ShipDetail(12),
        ] {
            assert_eq!(AppRoute::from_path(&route.to_path()), route);
        }
    }

    #[test]
    fn only_ship_routes_are_protected() {
        assert!(AppRoute::ShipList.requires_auth());
        assert!(AppRoute::ShipNew.requires_auth());
        assert!(AppRoute::ShipEdit(1).requires_auth());
        assert!(AppRoute::ShipDetail(1).requires_auth());
        assert!(!AppRoute::Login.requires_auth());
        assert!(!AppRoute::NotFound.requires_auth());
    }
}
