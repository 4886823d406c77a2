//! 应用上下文
//!
//! 由 `App` 根节点创建并通过 Leptos Context 向下传递，不使用全局单例。
//! 同时作为请求拦截器的 [`RequestHooks`]：令牌从会话读取，需要登录时打开登录弹窗。

use crate::web::{BrowserStorage, FetchHttpClient};
use cyberedu::config::{VAR_BASE_URL, VAR_TIMEOUT_MS, VAR_TOKEN_HEADER};
use cyberedu::{ApiClient, ClientConfig, DialogAction, RequestHooks, Store};
use leptos::prelude::*;

pub type AppClient = ApiClient<FetchHttpClient, AppContext>;

/// 浏览器里没有进程环境变量，配置在构建时通过 `option_env!` 注入
fn build_time_var(name: &str) -> Option<String> {
    let value = match name {
        VAR_BASE_URL => option_env!("CYBEREDU_API_BASE"),
        VAR_TIMEOUT_MS => option_env!("CYBEREDU_API_TIMEOUT_MS"),
        VAR_TOKEN_HEADER => option_env!("CYBEREDU_TOKEN_HEADER"),
        _ => None,
    };
    value.map(str::to_owned)
}

#[derive(Clone, Copy)]
pub struct AppContext {
    /// 存储中的枚举来源不是 Send 的，所以使用本地信号
    pub store: RwSignal<Store<BrowserStorage>, LocalStorage>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    /// 创建上下文，会话从 localStorage 恢复
    pub fn new() -> Self {
        let config = ClientConfig::from_lookup(build_time_var);
        tracing::info!(base_url = %config.base_url, "client configured");

        Self {
            store: RwSignal::new_local(Store::new(BrowserStorage)),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> AppClient {
        let config = self.config.get_value();
        let http = FetchHttpClient::new(config.timeout);
        ApiClient::new(config, http, *self)
    }

    pub fn dispatch(&self, action: impl Into<cyberedu::Action>) {
        let action = action.into();
        self.store.update(|store| store.dispatch(action));
    }

    pub fn is_logged_in(&self) -> bool {
        self.store.with(|store| store.user.is_logged_in())
    }
}

impl RequestHooks for AppContext {
    fn token(&self) -> Option<String> {
        self.store
            .with_untracked(|store| store.user.token().map(str::to_owned))
    }

    fn on_auth_required(&self) {
        self.dispatch(DialogAction::SetLogin(true));
    }
}

/// 从 Context 获取应用上下文
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
