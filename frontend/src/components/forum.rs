use crate::context::use_app;
use crate::web::router::{Link, use_router};
use cyberedu::ApiResult;
use cyberedu::api::{ForumApi, HomeFeed};
use cyberedu_shared::{ArticleDetail, ArticleQuery, ArticleSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn Loading() -> impl IntoView {
    view! {
        <div class="flex justify-center p-8">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
fn ErrorAlert(message: String) -> impl IntoView {
    view! {
        <div role="alert" class="alert alert-error text-sm">
            <span>{message}</span>
        </div>
    }
}

#[component]
fn ArticleRow(article: ArticleSummary) -> impl IntoView {
    let to = format!("/forumCenter/detail/{}", article.id);

    view! {
        <li class="py-3 border-b border-base-200">
            <Link to=to class="link link-hover font-medium">
                {article.is_top.then_some(view! { <span class="badge badge-error mr-2">"置顶"</span> })}
                {article.title}
            </Link>
            <div class="text-sm text-base-content/60 flex gap-4">
                <span>{article.author_name}</span>
                <span>{article.create_time}</span>
                <span>"浏览 " {article.view_count}</span>
            </div>
        </li>
    }
}

/// 论坛首页：文章列表 + 热门文章 + 热门标签
#[component]
pub fn ForumPage() -> impl IntoView {
    let app = use_app();
    let (page, set_page) = signal(1u32);
    let (feed, set_feed) = signal(None::<ApiResult<HomeFeed>>);

    Effect::new(move |_| {
        let query = ArticleQuery {
            page: page.get(),
            ..ArticleQuery::default()
        };
        set_feed.set(None);
        spawn_local(async move {
            let client = app.api();
            let result = ForumApi::new(&client).home_feed(query).await;
            if let Err(e) = &result {
                tracing::warn!(error = %e, "failed to load forum feed");
            }
            set_feed.set(Some(result));
        });
    });

    let total_pages = move || {
        feed.with(|f| match f {
            Some(Ok(feed)) => {
                let size = i64::from(ArticleQuery::default().page_size);
                ((feed.articles.total + size - 1) / size).max(1)
            }
            _ => 1,
        })
    };

    view! {
        {move || match feed.get() {
            None => view! { <Loading /> }.into_any(),
            Some(Err(e)) => view! { <ErrorAlert message=e.to_string() /> }.into_any(),
            Some(Ok(feed)) => view! {
                <div class="flex gap-6">
                    <div class="flex-1 card bg-base-100 shadow-sm">
                        <ul class="card-body">
                            {feed
                                .articles
                                .items
                                .into_iter()
                                .map(|article| view! { <ArticleRow article=article /> })
                                .collect_view()}
                        </ul>
                    </div>
                    <aside class="w-64 flex flex-col gap-4">
                        <div class="card bg-base-100 shadow-sm">
                            <div class="card-body">
                                <h3 class="font-bold">"热门文章"</h3>
                                <ol class="list-decimal list-inside">
                                    {feed
                                        .hot_articles
                                        .into_iter()
                                        .map(|a| {
                                            let to = format!("/forumCenter/detail/{}", a.id);
                                            view! { <li><Link to=to class="link link-hover">{a.title}</Link></li> }
                                        })
                                        .collect_view()}
                                </ol>
                            </div>
                        </div>
                        <div class="card bg-base-100 shadow-sm">
                            <div class="card-body flex-row flex-wrap gap-2">
                                {feed
                                    .hot_tags
                                    .into_iter()
                                    .map(|t| view! { <span class="badge badge-ghost">{t.name}</span> })
                                    .collect_view()}
                            </div>
                        </div>
                    </aside>
                </div>
            }
            .into_any(),
        }}
        <div class="join mt-4">
            <button
                class="join-item btn"
                disabled=move || page.get() <= 1
                on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
            >
                "上一页"
            </button>
            <span class="join-item btn btn-disabled">{move || format!("{} / {}", page.get(), total_pages())}</span>
            <button
                class="join-item btn"
                disabled=move || i64::from(page.get()) >= total_pages()
                on:click=move |_| set_page.update(|p| *p += 1)
            >
                "下一页"
            </button>
        </div>
    }
}

/// 文章详情，`:id` 来自路由参数
#[component]
pub fn ForumDetail() -> impl IntoView {
    let app = use_app();
    let router = use_router();
    let id = Memo::new(move |_| router.param("id").and_then(|id| id.parse::<i64>().ok()));
    let (detail, set_detail) = signal(None::<ApiResult<ArticleDetail>>);

    Effect::new(move |_| {
        let Some(id) = id.get() else {
            return;
        };
        set_detail.set(None);
        spawn_local(async move {
            let client = app.api();
            let result = ForumApi::new(&client).article_detail(id).await;
            set_detail.set(Some(result));
        });
    });

    move || {
        if id.get().is_none() {
            return view! { <ErrorAlert message="文章编号无效".to_string() /> }.into_any();
        }

        match detail.get() {
            None => view! { <Loading /> }.into_any(),
            Some(Err(e)) => view! { <ErrorAlert message=e.to_string() /> }.into_any(),
            Some(Ok(article)) => view! {
                <article class="card bg-base-100 shadow-sm">
                    <div class="card-body">
                        <h1 class="card-title text-2xl">{article.summary.title}</h1>
                        <div class="text-sm text-base-content/60 flex gap-4">
                            <span>{article.summary.author_name}</span>
                            <span>{article.cate_name}</span>
                            <span>{article.summary.create_time}</span>
                        </div>
                        <div class="flex gap-2">
                            {article
                                .summary
                                .tag_list
                                .into_iter()
                                .map(|t| view! { <span class="badge badge-ghost">{t.name}</span> })
                                .collect_view()}
                        </div>
                        <div class="prose max-w-none" inner_html=article.content></div>
                    </div>
                </article>
                <Link to="/forumCenter/page" class="btn btn-ghost mt-4">"返回列表"</Link>
            }
            .into_any(),
        }
    }
}
