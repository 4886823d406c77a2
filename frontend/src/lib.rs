//! CyberEdu 前端应用
//!
//! 采用 Context-Driven 架构，业务状态与路由表都在核心库 `cyberedu` 中：
//! - `context`: 应用上下文（存储 + 请求客户端）
//! - `web::router`: 路由服务（hash 模式）与嵌套出口
//! - `components`: UI 组件层

mod context;
mod components {
    pub mod forum;
    pub mod layout;
    pub mod login_dialog;
    pub mod pages;
}

// 原生 Web API 封装模块
// 为核心库的存储与 HTTP 抽象提供浏览器实现
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchHttpClient;
    pub use storage::BrowserStorage;
}

use crate::components::forum::{ForumDetail, ForumPage};
use crate::components::layout::{
    FORUM_TABS, IndexLayout, NEWS_TABS, NOTICE_TABS, PERSONAL_TABS, SectionLayout,
};
use crate::components::login_dialog::LoginDialog;
use crate::components::pages::{HomeCenter, NotFound, ParamPage, Placeholder};
use crate::context::AppContext;
use cyberedu::Page;
use leptos::prelude::*;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 对匹配链上的每一层调用一次；布局页面内部通过 `Outlet` 渲染下一层。
fn route_matcher(page: Page) -> AnyView {
    match page {
        Page::Index => view! { <IndexLayout /> }.into_any(),
        Page::ForumCenter => view! { <SectionLayout title="论坛" tabs=FORUM_TABS /> }.into_any(),
        Page::PersonalCenter => {
            view! { <SectionLayout title="个人中心" tabs=PERSONAL_TABS /> }.into_any()
        }
        Page::NoticeCenter => view! { <SectionLayout title="消息中心" tabs=NOTICE_TABS /> }.into_any(),
        Page::NewsCenter => view! { <SectionLayout title="新闻中心" tabs=NEWS_TABS /> }.into_any(),

        Page::HomeCenter => view! { <HomeCenter /> }.into_any(),
        Page::ForumPage => view! { <ForumPage /> }.into_any(),
        Page::ForumDetail => view! { <ForumDetail /> }.into_any(),
        Page::VideoDetail => view! { <ParamPage title="视频播放" param="vid" /> }.into_any(),
        Page::NewsDetail => view! { <ParamPage title="新闻详情" param="id" /> }.into_any(),

        Page::Know => view! { <Placeholder title="知识图谱" /> }.into_any(),
        Page::CourseCenter => view! { <Placeholder title="课程中心" /> }.into_any(),
        Page::LearnCenter => view! { <Placeholder title="学习中心" /> }.into_any(),
        Page::TeacherCenter => view! { <Placeholder title="名师风采" /> }.into_any(),
        Page::TeacherDetail => view! { <Placeholder title="教师详情" /> }.into_any(),
        Page::CourseDetail => view! { <Placeholder title="课程详情" /> }.into_any(),
        Page::Webrtc => view! { <Placeholder title="直播" /> }.into_any(),
        Page::Information => view! { <Placeholder title="个人资料" /> }.into_any(),
        Page::MyClasses => view! { <Placeholder title="我的课程" /> }.into_any(),
        Page::Answer => view! { <Placeholder title="我的问答" /> }.into_any(),
        Page::Msg => view! { <Placeholder title="系统消息" /> }.into_any(),
        Page::Exam => view! { <Placeholder title="考试通知" /> }.into_any(),
        Page::Busywork => view! { <Placeholder title="作业通知" /> }.into_any(),
        Page::Home => view! { <Placeholder title="个人主页" /> }.into_any(),
        Page::AskRelease => view! { <Placeholder title="发布问题" /> }.into_any(),
        Page::NewsList => view! { <Placeholder title="新闻列表" /> }.into_any(),
        Page::About => view! { <Placeholder title="关于我们" /> }.into_any(),
        Page::ExamPaperDo => view! { <Placeholder title="在线考试" /> }.into_any(),
        Page::ExamPaperRead => view! { <Placeholder title="试卷查看" /> }.into_any(),
        Page::NotFound => view! { <NotFound /> }.into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建应用上下文（会话从 localStorage 恢复）
    let app = AppContext::new();
    provide_context(app);

    view! {
        // 2. 路由器组件
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
        // 3. 登录弹窗挂在路由之外，任何页面都能打开
        <LoginDialog />
    }
}
