//! 论坛相关的传输模型

use crate::serde_helper::null_default;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    /// 热度，仅热门标签接口返回
    #[serde(default)]
    pub hot: i64,
}

/// 热门文章（精简字段）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotArticle {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub create_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSummary {
    pub id: i64,
    pub title: String,
    #[serde(default, rename = "stuId")]
    pub author_id: String,
    #[serde(default, rename = "stuName")]
    pub author_name: String,
    #[serde(default, rename = "stuHead")]
    pub author_avatar: String,
    #[serde(default)]
    pub cate_id: i64,
    #[serde(default)]
    pub is_top: bool,
    #[serde(default)]
    pub is_ess: bool,
    #[serde(default)]
    pub view_count: i64,
    #[serde(default)]
    pub create_time: String,
    #[serde(default)]
    pub update_time: String,
    #[serde(default, deserialize_with = "null_default")]
    pub tag_list: Vec<Tag>,
}

/// 文章分页结果
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticlePage {
    #[serde(default, deserialize_with = "null_default")]
    pub items: Vec<ArticleSummary>,
    #[serde(default)]
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail {
    #[serde(flatten)]
    pub summary: ArticleSummary,
    #[serde(default)]
    pub cate_name: String,
    #[serde(default)]
    pub content: String,
}

/// 文章详情接口的 `data` 包装：`{"aclInfo": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDetailData {
    #[serde(rename = "aclInfo")]
    pub article: ArticleDetail,
}

/// 文章列表查询参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleQuery {
    pub page: u32,
    pub page_size: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cate_id: Option<i64>,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            cate_id: None,
        }
    }
}
