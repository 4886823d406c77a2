use crate::context::use_app;
use crate::web::router::{Link, Outlet, use_router};
use cyberedu::{DialogAction, UserAction};
use leptos::prelude::*;

const NAV: &[(&str, &str)] = &[
    ("/homeCenter", "首页"),
    ("/courseCenter", "课程中心"),
    ("/learnCenter", "学习中心"),
    ("/forumCenter", "论坛"),
    ("/teacherCenter", "名师"),
    ("/news", "新闻"),
    ("/notice", "消息"),
];

pub const FORUM_TABS: &[(&str, &str)] = &[("/forumCenter/page", "全部帖子")];

pub const PERSONAL_TABS: &[(&str, &str)] = &[
    ("/personalCenter/information", "个人资料"),
    ("/personalCenter/myClasses", "我的课程"),
    ("/personalCenter/answer", "我的问答"),
];

pub const NOTICE_TABS: &[(&str, &str)] = &[
    ("/notice/msg", "系统消息"),
    ("/notice/exam", "考试通知"),
    ("/notice/Busywork", "作业通知"),
];

pub const NEWS_TABS: &[(&str, &str)] = &[("/news/list", "新闻列表")];

/// 顶部导航中的用户区域
#[component]
fn UserMenu() -> impl IntoView {
    let app = use_app();
    let nickname = move || app.store.with(|s| s.user.session().nickname.clone());

    view! {
        <Show
            when=move || app.is_logged_in()
            fallback=move || view! {
                <button
                    class="btn btn-primary btn-sm"
                    on:click=move |_| app.dispatch(DialogAction::SetLogin(true))
                >
                    "登录"
                </button>
            }
        >
            <div class="flex items-center gap-2">
                <Link to="/personalCenter" class="link link-hover">
                    {nickname}
                </Link>
                <button
                    class="btn btn-ghost btn-sm"
                    on:click=move |_| app.dispatch(UserAction::Logout)
                >
                    "退出"
                </button>
            </div>
        </Show>
    }
}

/// 站点外壳：导航栏 + 内容区 + 页脚
#[component]
pub fn IndexLayout() -> impl IntoView {
    let router = use_router();
    let active = move |prefix: &'static str| {
        router
            .current()
            .with(|r| r.path.to_ascii_lowercase().starts_with(&prefix.to_ascii_lowercase()))
    };

    view! {
        <div class="min-h-screen flex flex-col bg-base-200">
            <header class="navbar bg-base-100 shadow-sm px-6">
                <div class="flex-1 gap-4">
                    <Link to="/" class="text-xl font-bold text-primary">"CyberEdu"</Link>
                    <ul class="menu menu-horizontal">
                        {NAV
                            .iter()
                            .map(|&(to, label)| {
                                view! {
                                    <li class=("font-bold", move || active(to))>
                                        <Link to=to>{label}</Link>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
                <UserMenu />
            </header>
            <main class="flex-1 container mx-auto p-6">
                <Outlet />
            </main>
            <footer class="footer footer-center p-4 text-base-content/60">
                <Link to="/about">"关于我们"</Link>
            </footer>
        </div>
    }
}

/// 二级页面外壳：左侧标签 + 内容区
#[component]
pub fn SectionLayout(title: &'static str, tabs: &'static [(&'static str, &'static str)]) -> impl IntoView {
    let router = use_router();

    view! {
        <div class="flex gap-6">
            <aside class="w-48 shrink-0">
                <h2 class="text-lg font-bold mb-2">{title}</h2>
                <ul class="menu bg-base-100 rounded-box">
                    {tabs
                        .iter()
                        .map(|&(to, label)| {
                            let selected = move || router.current().with(|r| r.path.eq_ignore_ascii_case(to));
                            view! {
                                <li class=("font-bold", selected)>
                                    <Link to=to>{label}</Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>
            <section class="flex-1">
                <Outlet />
            </section>
        </div>
    }
}
