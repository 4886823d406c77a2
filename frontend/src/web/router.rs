//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History / Location API（hash 模式），
//! 所有对 `window.history` 的操作都集中在此模块。
//! 路径解析交给核心库的 [`RouteTable`]：先应用重定向，再确定每一层的组件。

use cyberedu::{Page, Resolved, RouteTable};
use leptos::context::Provider;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前 hash 中的路径，`#/news/list` -> `/news/list`
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| hash.trim_start_matches('#').to_string())
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", path)));
    }
}

/// 用于重定向，不产生新的历史记录
fn replace_history_state(path: &str) {
    if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
        let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", path)));
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// 路由器服务
///
/// 当前解析结果保存在信号里，界面通过它驱动更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    table: RouteTable,
    current: ReadSignal<Resolved>,
    set_current: WriteSignal<Resolved>,
}

impl RouterService {
    fn new(table: RouteTable) -> Self {
        let resolved = table.resolve(&current_path());
        if resolved.path != current_path() {
            replace_history_state(&resolved.path);
        }
        let (current, set_current) = signal(resolved);

        Self {
            table,
            current,
            set_current,
        }
    }

    pub fn current(&self) -> ReadSignal<Resolved> {
        self.current
    }

    /// 当前匹配到的动态参数
    pub fn param(&self, name: &str) -> Option<String> {
        self.current.with(|r| r.param(name).map(str::to_owned))
    }

    /// 导航：解析（含重定向）-> 写入历史 -> 更新状态 -> 滚动到顶部
    pub fn navigate(&self, path: &str) {
        let resolved = self.table.resolve(path);
        if resolved.is_not_found() {
            tracing::warn!(path, "no route matched");
        }

        push_history_state(&resolved.path);
        self.set_current.set(resolved);
        scroll_to_top();
    }

    /// 浏览器后退/前进，或直接修改 hash
    fn sync_from_location(&self) {
        let path = current_path();
        let resolved = self.table.resolve(&path);
        if resolved.path != path {
            replace_history_state(&resolved.path);
        }

        if self.current.with_untracked(|current| current != &resolved) {
            self.set_current.set(resolved);
            scroll_to_top();
        }
    }

    fn init_history_listeners(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let router = *self;
        let closure = Closure::<dyn Fn()>::new(move || router.sync_from_location());

        for event in ["popstate", "hashchange"] {
            let _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

fn provide_router(table: RouteTable) -> RouterService {
    let router = RouterService::new(table);
    router.init_history_listeners();
    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 页面匹配函数：接收匹配链上某一层的页面，返回对应视图
#[derive(Clone, Copy)]
struct RouteMatcher(fn(Page) -> AnyView);

/// 当前出口所在的层级，0 为最外层
#[derive(Clone, Copy)]
struct OutletDepth(usize);

/// 路由器根组件
#[component]
pub fn Router(children: Children) -> impl IntoView {
    provide_router(RouteTable::default());
    children()
}

/// 路由出口组件
///
/// 渲染匹配链的最外层；布局组件内部再放 [`Outlet`] 渲染下一层。
#[component]
pub fn RouterOutlet(matcher: fn(Page) -> AnyView) -> impl IntoView {
    provide_context(RouteMatcher(matcher));
    render_level(0)
}

/// 嵌套出口，放在布局组件中
#[component]
pub fn Outlet() -> impl IntoView {
    let depth = use_context::<OutletDepth>().map_or(0, |OutletDepth(d)| d + 1);
    render_level(depth)
}

fn render_level(depth: usize) -> impl IntoView {
    let router = use_router();
    let RouteMatcher(matcher) = expect_context::<RouteMatcher>();

    // 只有本层页面变化时才重新渲染，子路由切换不会重建布局
    let page = Memo::new(move |_| router.current().with(|r| r.page_at(depth)));

    move || {
        page.get().map(|page| {
            view! {
                <Provider value=OutletDepth(depth)>
                    {matcher(page)}
                </Provider>
            }
        })
    }
}

/// 站内链接
#[component]
pub fn Link(
    #[prop(into)] to: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = format!("#{}", to);

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(&to);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
