//! 路由守卫
//!
//! 纯函数：每次导航（包括浏览器前进/后退和首次加载）都会重新求值，不做缓存。

use super::route::AppRoute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(AppRoute),
}

/// 根据认证状态判断是否允许进入目标路由
pub fn check(target: &AppRoute, is_authenticated: bool) -> GuardDecision {
    if target.requires_auth() && !is_authenticated {
        return GuardDecision::Redirect(AppRoute::auth_failure_redirect());
    }

    if target.should_redirect_when_authenticated() && is_authenticated {
        return GuardDecision::Redirect(AppRoute::auth_success_redirect());
    }

    GuardDecision::Allow
}

/// 守卫放行后实际进入的路由
pub fn resolve(target: AppRoute, is_authenticated: bool) -> AppRoute {
    match check(&target, is_authenticated) {
        GuardDecision::Allow => target,
        GuardDecision::Redirect(redirect) => redirect,
    }
}

/// 认证状态变化时当前页面是否需要跳转
///
/// 只处理失去认证：登录成功后的跳转由登录页自行发起。
pub fn on_auth_change(current: AppRoute, is_authenticated: bool) -> Option<AppRoute> {
    (!is_authenticated && current.requires_auth()).then(AppRoute::auth_failure_redirect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_users_are_sent_to_login() {
        for path in ["/ships", "/ships/new", "/ships/3/edit", "/ships/3"] {
            let route = AppRoute::from_path(path);
            assert_eq!(
                check(&route, false),
                GuardDecision::Redirect(AppRoute::Login),
                "{path} should be guarded"
            );
        }
    }

    #[test]
    fn authenticated_users_pass_through() {
        for route in [
            AppRoute::ShipList,
            AppRoute::ShipNew,
            AppRoute::ShipEdit(3),
            AppRoute::ShipDetail(3),
            AppRoute::NotFound,
        ] {
            assert_eq!(check(&route, true), GuardDecision::Allow);
        }
    }

    #[test]
    fn login_page_forwards_authenticated_users() {
        assert_eq!(resolve(AppRoute::Login, true), AppRoute::ShipList);
        assert_eq!(resolve(AppRoute::Login, false), AppRoute::Login);
    }

    #[test]
    fn decision_follows_current_state() {
        let route = AppRoute::ShipDetail(5);
        assert_eq!(resolve(route, true), route);
        assert_eq!(resolve(route, false), AppRoute::Login);
        assert_eq!(resolve(route, true), route);
    }

    #[test]
    fn signing_in_leaves_navigation_to_login_view() {
        assert_eq!(on_auth_change(AppRoute::Login, true), None);
    }

    #[test]
    fn losing_session_on_protected_page_returns_to_login() {
        assert_eq!(
            on_auth_change(AppRoute::ShipDetail(3), false),
            Some(AppRoute::Login)
        );
        assert_eq!(on_auth_change(AppRoute::ShipList, false), Some(AppRoute::Login));
    }

    #[test]
    fn losing_session_on_public_page_stays() {
        assert_eq!(on_auth_change(AppRoute::Login, false), None);
        assert_eq!(on_auth_change(AppRoute::NotFound, false), None);
    }
}
