//! 简单页面
//!
//! 业务内容尚未接入后端的页面只渲染标题。

use crate::context::use_app;
use crate::web::router::{Link, use_router};
use cyberedu::EnumItemAction;
use leptos::prelude::*;

#[component]
pub fn Placeholder(title: &'static str) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h1 class="card-title">{title}</h1>
                <p class="text-base-content/60">"敬请期待"</p>
            </div>
        </div>
    }
}

/// 首页：展示枚举项
#[component]
pub fn HomeCenter() -> impl IntoView {
    let app = use_app();
    app.dispatch(EnumItemAction::FetchItems);

    let items = move || {
        app.store.with(|s| {
            s.enum_item
                .items()
                .iter()
                .map(|item| view! { <span class="badge badge-outline">{item.label.clone()}</span> })
                .collect_view()
        })
    };

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h1 class="card-title">"首页"</h1>
                <div class="flex gap-2">{items}</div>
            </div>
        </div>
    }
}

/// 带动态参数的页面，只展示参数
#[component]
pub fn ParamPage(title: &'static str, param: &'static str) -> impl IntoView {
    let router = use_router();
    let value = move || router.param(param).unwrap_or_default();

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h1 class="card-title">{title}</h1>
                <p class="font-mono">{param} ": " {value}</p>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"页面未找到"</p>
                <Link to="/" class="btn btn-primary mt-6">"返回首页"</Link>
            </div>
        </div>
    }
}
