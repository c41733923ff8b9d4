//! 页面分析：登录页识别、软跳转提取、表单字段查找

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// 校园网登录页 URL 常见关键字
const LOGIN_KEYWORDS: &[&str] = &[
    "login",
    "auth",
    "portal",
    "认证",
    "登录",
    "connect",
    "wifilogin",
    "web-auth",
    "captive-portal",
];

static META_REFRESH: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<meta[^>]+http-equiv\s*=\s*["']?refresh["']?[^>]*content\s*=\s*["'][^"']*?url\s*=\s*([^"'>\s]+)"#,
    )
    .ok()
});

static SCRIPT_LOCATION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"(?i)location(?:\.href)?\s*(?:=\s*|\.(?:replace|assign)\(\s*)["']([^"']+)["']"#)
        .ok()
});

static TITLE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").ok());

static INPUT_TAG: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?is)<input\b[^>]*>").ok());

static FORM_ACTION: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"(?is)<form\b[^>]*?\baction\s*=\s*["']([^"']*)["']"#).ok()
});

static ATTRIBUTE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(name|type|id|placeholder)\s*=\s*["']([^"']*)["']"#).ok()
});

/// 判断 URL 是否像登录页：关键字命中，或主机是私有网段网关
pub fn is_login_page(url: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    // 中文关键字在 URL 中通常是百分号编码
    let decoded =
        String::from_utf8_lossy(&urlencoding::decode_binary(url.as_bytes())).to_lowercase();
    let lower = url.to_lowercase();
    if LOGIN_KEYWORDS
        .iter()
        .any(|k| lower.contains(k) || decoded.contains(k))
    {
        return true;
    }

    parsed.host_str().is_some_and(is_private_gateway)
}

fn is_private_gateway(host: &str) -> bool {
    if host.starts_with("10.") || host.starts_with("192.168.") {
        return true;
    }
    host.strip_prefix("172.")
        .and_then(|rest| rest.split('.').next())
        .and_then(|octet| octet.parse::<u8>().ok())
        .is_some_and(|octet| (16..=31).contains(&octet))
}

/// 页面中 meta refresh 或脚本跳转的目标（已相对 `base` 解析）
pub fn soft_redirect(base: &Url, body: &str) -> Option<Url> {
    let target = [&*META_REFRESH, &*SCRIPT_LOCATION]
        .into_iter()
        .flatten()
        .find_map(|re| re.captures(body))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())?;
    base.join(target).ok()
}

/// 页面标题
pub fn page_title(body: &str) -> String {
    TITLE
        .as_ref()
        .and_then(|re| re.captures(body))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct InputTag {
    name: String,
    kind: String,
    id: String,
    placeholder: String,
}

fn inputs(body: &str) -> Vec<InputTag> {
    let (Some(tag_re), Some(attr_re)) = (INPUT_TAG.as_ref(), ATTRIBUTE.as_ref()) else {
        return Vec::new();
    };
    tag_re
        .find_iter(body)
        .map(|tag| {
            let mut input = InputTag::default();
            for caps in attr_re.captures_iter(tag.as_str()) {
                let value = caps[2].to_string();
                match caps[1].to_ascii_lowercase().as_str() {
                    "name" => input.name = value,
                    "type" => input.kind = value.to_ascii_lowercase(),
                    "id" => input.id = value,
                    _ => input.placeholder = value,
                }
            }
            input
        })
        .collect()
}

impl InputTag {
    fn is_username(&self) -> bool {
        let name = self.name.to_ascii_lowercase();
        name == "username"
            || name == "username_tip"
            || self.id.to_ascii_lowercase().contains("username")
            || ["用户", "账号", "学号", "username", "account"]
                .iter()
                .any(|k| self.placeholder.to_lowercase().contains(k))
            || (self.kind == "text" && !self.name.is_empty())
    }

    fn is_password(&self) -> bool {
        let name = self.name.to_ascii_lowercase();
        self.kind == "password" || name == "password" || name == "pwd_tip"
    }
}

/// 登录表单分析结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoginForm {
    /// 表单提交地址（未解析的原始值）
    pub action: Option<String>,
    /// 用户名输入框的 name
    pub username_field: Option<String>,
    /// 密码输入框的 name
    pub password_field: Option<String>,
}

impl LoginForm {
    pub fn inspect(body: &str) -> Self {
        let inputs = inputs(body);
        // 密码框优先判定，避免 type=password 被当成用户名
        let password = inputs.iter().find(|i| i.is_password());
        let username = inputs
            .iter()
            .filter(|i| !i.is_password())
            .find(|i| i.is_username());
        let action = FORM_ACTION
            .as_ref()
            .and_then(|re| re.captures(body))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|a| !a.is_empty());

        Self {
            action,
            username_field: username.map(|i| i.name.clone()),
            password_field: password.map(|i| i.name.clone()),
        }
    }

    pub fn has_username(&self) -> bool {
        self.username_field.is_some()
    }

    pub fn has_password(&self) -> bool {
        self.password_field.is_some()
    }
}
