use serde::{Deserialize, Serialize};

pub mod forum;
pub mod protocol;
pub mod serde_helper;

pub use forum::{
    ArticleDetail, ArticleDetailData, ArticlePage, ArticleQuery, ArticleSummary, HotArticle, Tag,
};
pub use protocol::{ApiRequest, Envelope, HttpMethod};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端信封中表示成功的业务码
pub const SUCCESS_CODE: i64 = 20000;
/// 后端信封中表示"需要登录"的业务码，会触发登录弹窗
pub const AUTH_REQUIRED_CODE: i64 = 20002;
/// 默认的令牌请求头
pub const HEADER_TOKEN: &str = "X-Token";
/// 会话在持久化存储中的键
pub const SESSION_STORAGE_KEY: &str = "user";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 当前登录用户的会话资料
///
/// 序列化使用 camelCase 字段名；反序列化同时接受后端用户记录的旧字段名
/// (`stuId`, `userHead`, `nickName`, `userName`, `userEmail`)。
/// 缺失的字段取默认值（空字符串）。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Session {
    #[serde(deserialize_with = "serde_helper::string_or_number")]
    pub id: String,
    #[serde(alias = "stuId")]
    pub external_user_id: String,
    #[serde(alias = "userHead")]
    pub avatar_url: String,
    #[serde(alias = "nickName")]
    pub nickname: String,
    #[serde(alias = "userName")]
    pub login_name: String,
    #[serde(alias = "userEmail")]
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Session {
    /// 从持久化的原始字符串恢复会话
    ///
    /// 这是一个全函数：键不存在、内容为 `null` 或无法解析时都返回默认会话，从不报错。
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        raw.and_then(|s| serde_json::from_str::<Option<Session>>(s).ok())
            .flatten()
            .unwrap_or_default()
    }

    /// 浅合并：只覆盖 patch 中提供了的字段
    pub fn merge(&mut self, patch: SessionPatch) {
        let SessionPatch {
            id,
            external_user_id,
            avatar_url,
            nickname,
            login_name,
            email,
            token,
        } = patch;

        if let Some(v) = id {
            self.id = v;
        }
        if let Some(v) = external_user_id {
            self.external_user_id = v;
        }
        if let Some(v) = avatar_url {
            self.avatar_url = v;
        }
        if let Some(v) = nickname {
            self.nickname = v;
        }
        if let Some(v) = login_name {
            self.login_name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if token.is_some() {
            self.token = token;
        }
    }

    /// 未登录的会话 id 为空
    pub fn is_anonymous(&self) -> bool {
        self.id.is_empty()
    }
}

/// 会话的部分更新
///
/// 字段为 `Some` 表示"已提供"；JSON 中的 `null` 视为未提供。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPatch {
    #[serde(
        default,
        deserialize_with = "serde_helper::opt_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    #[serde(default, alias = "stuId", skip_serializing_if = "Option::is_none")]
    pub external_user_id: Option<String>,
    #[serde(default, alias = "userHead", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, alias = "nickName", skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(default, alias = "userName", skip_serializing_if = "Option::is_none")]
    pub login_name: Option<String>,
    #[serde(default, alias = "userEmail", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// 枚举项（键值对）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumItem {
    pub id: i64,
    #[serde(alias = "name")]
    pub label: String,
}

impl EnumItem {
    pub fn new(id: i64, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// 登录凭据
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginCredentials {
    pub password: String,
    pub external_user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_overrides_only_provided_fields() {
        let mut session = Session {
            id: "7".into(),
            nickname: "old".into(),
            email: "a@b.c".into(),
            ..Default::default()
        };

        session.merge(SessionPatch {
            nickname: Some("new".into()),
            ..Default::default()
        });

        assert_eq!(session.id, "7");
        assert_eq!(session.nickname, "new");
        assert_eq!(session.email, "a@b.c");
    }

    #[test]
    fn test_parse_or_default_never_fails() {
        assert_eq!(Session::parse_or_default(None), Session::default());
        assert_eq!(Session::parse_or_default(Some("")), Session::default());
        assert_eq!(Session::parse_or_default(Some("{not json")), Session::default());
        assert_eq!(Session::parse_or_default(Some("null")), Session::default());
        assert_eq!(Session::parse_or_default(Some("[1,2]")), Session::default());
    }

    #[test]
    fn test_parse_or_default_fills_missing_fields() {
        let session = Session::parse_or_default(Some(r#"{"nickname":"kit"}"#));
        assert_eq!(session.nickname, "kit");
        assert!(session.id.is_empty());
        assert!(session.token.is_none());
    }

    #[test]
    fn test_backend_user_record_becomes_patch() {
        let patch: SessionPatch = serde_json::from_value(json!({
            "id": 12,
            "stuId": "2021001",
            "userEmail": "s@uni.edu",
            "userHead": "/img/u.png",
            "userName": "student",
            "nickName": "Sam"
        }))
        .unwrap();

        assert_eq!(patch.id.as_deref(), Some("12"));
        assert_eq!(patch.external_user_id.as_deref(), Some("2021001"));
        assert_eq!(patch.avatar_url.as_deref(), Some("/img/u.png"));
        assert_eq!(patch.login_name.as_deref(), Some("student"));
        assert_eq!(patch.nickname.as_deref(), Some("Sam"));
        assert_eq!(patch.email.as_deref(), Some("s@uni.edu"));
        assert!(patch.token.is_none());
    }

    #[test]
    fn test_session_serializes_with_camel_case_names() {
        let session = Session {
            id: "1".into(),
            external_user_id: "s1".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&session).unwrap();
        assert_eq!(value["externalUserId"], "s1");
        assert_eq!(value["avatarUrl"], "");
        assert!(value.get("token").is_none());
    }

    #[test]
    fn test_enum_item_accepts_name_alias() {
        let item: EnumItem = serde_json::from_value(json!({"id": 1, "name": "选项1"})).unwrap();
        assert_eq!(item, EnumItem::new(1, "选项1"));
    }
}
