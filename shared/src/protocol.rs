use crate::forum::{ArticleDetailData, ArticlePage, ArticleQuery, HotArticle, Tag};
use crate::{AUTH_REQUIRED_CODE, LoginCredentials, SUCCESS_CODE, SessionPatch};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::borrow::Cow;

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

// =========================================================
// 响应信封 (Envelope)
// =========================================================

/// 后端统一响应格式 `{code, message, data}`
///
/// 登录接口把用户记录放在 `user` 字段里；只有缺少 `data` 时才读取 `user`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawEnvelope")]
pub struct Envelope {
    pub code: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: Value,
}

#[derive(Deserialize)]
struct RawEnvelope {
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    user: Option<Value>,
}

impl From<RawEnvelope> for Envelope {
    fn from(raw: RawEnvelope) -> Self {
        Self {
            code: raw.code,
            message: raw.message,
            data: raw.data.or(raw.user).unwrap_or(Value::Null),
        }
    }
}

impl Envelope {
    pub fn ok(data: Value) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: None,
            data,
        }
    }

    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    pub fn is_auth_required(&self) -> bool {
        self.code == AUTH_REQUIRED_CODE
    }

    /// 服务端消息；缺失或为空时为 `"Error"`
    pub fn message_or_default(&self) -> &str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => "Error",
        }
    }
}

// =========================================================
// 请求定义 (Request Definitions)
// =========================================================

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The type decoded from the envelope's `data`.
    type Response: DeserializeOwned;
    /// The URL path template.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;

    /// 实际请求路径，带路径参数的请求需要覆盖
    fn path(&self) -> Cow<'static, str> {
        Cow::Borrowed(Self::PATH)
    }

    /// 查询参数
    fn query(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// JSON 请求体；GET 请求没有请求体
    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        if Self::METHOD == HttpMethod::Get {
            Ok(None)
        } else {
            serde_json::to_value(self).map(Some)
        }
    }
}

/// 热门文章。后端在没有数据时可能省略 `data`。
#[derive(Debug, Serialize)]
pub struct HotArticlesRequest;

impl ApiRequest for HotArticlesRequest {
    type Response = Option<Vec<HotArticle>>;
    const PATH: &'static str = "/api/forum/articles/hot";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 热门标签
#[derive(Debug, Serialize)]
pub struct HotTagsRequest;

impl ApiRequest for HotTagsRequest {
    type Response = Option<Vec<Tag>>;
    const PATH: &'static str = "/api/forum/tags/hot";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// 文章列表（分页）
#[derive(Debug, Serialize)]
pub struct ListArticlesRequest(pub ArticleQuery);

impl ApiRequest for ListArticlesRequest {
    type Response = ArticlePage;
    const PATH: &'static str = "/api/forum/articles";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.0.page.to_string()),
            ("pageSize", self.0.page_size.to_string()),
        ];
        if let Some(cate_id) = self.0.cate_id {
            pairs.push(("cateId", cate_id.to_string()));
        }
        pairs
    }
}

/// 文章详情
#[derive(Debug, Serialize)]
pub struct ArticleDetailRequest {
    pub id: i64,
}

impl ApiRequest for ArticleDetailRequest {
    type Response = ArticleDetailData;
    const PATH: &'static str = "/api/forum/articles/:id";
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> Cow<'static, str> {
        Cow::Owned(format!("/api/forum/articles/{}", self.id))
    }
}

/// 登录，成功时返回用户记录
impl ApiRequest for LoginCredentials {
    type Response = Option<SessionPatch>;
    const PATH: &'static str = "/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_defaults_missing_fields() {
        let env: Envelope = serde_json::from_value(json!({"code": 50000})).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.message_or_default(), "Error");
        assert!(env.data.is_null());
    }

    #[test]
    fn test_envelope_reads_login_user_as_data() {
        let env: Envelope = serde_json::from_value(json!({
            "code": 20000,
            "message": "登录成功",
            "user": {"id": 3}
        }))
        .unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, json!({"id": 3}));
    }

    #[test]
    fn test_envelope_prefers_data_over_user() {
        let env: Envelope = serde_json::from_value(json!({
            "code": 20000,
            "data": {"id": 1},
            "user": {"id": 2}
        }))
        .unwrap();
        assert!(env.is_success());
        assert_eq!(env.data, json!({"id": 1}));

        let env: Envelope = serde_json::from_value(json!({
            "code": 20000,
            "data": null,
            "user": {"id": 2}
        }))
        .unwrap();
        assert_eq!(env.data, json!({"id": 2}));
    }

    #[test]
    fn test_list_articles_query_pairs() {
        let req = ListArticlesRequest(ArticleQuery {
            page: 2,
            page_size: 20,
            cate_id: Some(5),
        });
        assert_eq!(
            req.query(),
            vec![
                ("page", "2".to_string()),
                ("pageSize", "20".to_string()),
                ("cateId", "5".to_string()),
            ]
        );
        assert_eq!(req.body().unwrap(), None);
    }

    #[test]
    fn test_article_detail_path_embeds_id() {
        assert_eq!(ArticleDetailRequest { id: 42 }.path(), "/api/forum/articles/42");
    }

    #[test]
    fn test_login_body_uses_external_user_id() {
        let creds = LoginCredentials {
            password: "pw".into(),
            external_user_id: "2021001".into(),
        };
        assert_eq!(
            creds.body().unwrap(),
            Some(json!({"password": "pw", "externalUserId": "2021001"}))
        );
    }
}
