//! HTTP 网络探测与登录引擎
//!
//! - 连通性：访问连通性站点，看最终是否真的到达（同源或标题命中）
//! - 检测：依次访问探测地址，跟随 HTTP 跳转和页面内软跳转，第一个像登录页的最终地址即为结果
//! - 连接测试：打开已保存的登录地址，报告是否找到用户名 / 密码输入框
//! - 登录：按登录页表单提交账号、密码与运营商

mod page;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use campus_autologin_core::error::{CoreError, CoreResult};
use campus_autologin_core::{NetworkAccess, NetworkStatus, SettingsRecord, SettingsStore};
use reqwest::{redirect, Client};
use url::Url;

use crate::config::ProbeConfig;

use page::{is_login_page, page_title, soft_redirect, LoginForm};

/// HTTP 跳转上限
const MAX_HTTP_REDIRECTS: usize = 10;
/// 页面内（meta / 脚本）跳转上限
const MAX_SOFT_REDIRECTS: usize = 3;
/// 只在小页面上寻找软跳转，正常网站首页里的脚本不算
const SOFT_REDIRECT_MAX_BODY: usize = 8 * 1024;

/// 探测参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub connectivity_url: String,
    pub connectivity_title: String,
    pub probe_urls: Vec<String>,
    pub request_timeout: Duration,
}

impl From<&ProbeConfig> for ProbeSettings {
    fn from(config: &ProbeConfig) -> Self {
        Self {
            connectivity_url: config.connectivity_url.clone(),
            connectivity_title: config.connectivity_title.clone(),
            probe_urls: config.probe_urls.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

/// 一次访问的最终结果
#[derive(Debug)]
struct FetchedPage {
    final_url: Url,
    status: u16,
    body: String,
}

/// HTTP 网络访问实现
pub struct HttpNetworkAccess {
    client: Client,
    probe: ProbeSettings,
    settings_store: Arc<dyn SettingsStore>,
}

impl HttpNetworkAccess {
    /// 创建实例；登录 / 测试时从 `settings_store` 读取已保存的账号与地址
    pub fn new(probe: ProbeSettings, settings_store: Arc<dyn SettingsStore>) -> CoreResult<Self> {
        let client = Client::builder()
            .timeout(probe.request_timeout)
            .redirect(redirect::Policy::limited(MAX_HTTP_REDIRECTS))
            .no_proxy()
            .build()
            .map_err(|e| CoreError::NetworkError(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            probe,
            settings_store,
        })
    }

    /// GET 并跟随跳转（含页面内软跳转）
    async fn fetch(&self, url: &str) -> CoreResult<FetchedPage> {
        let mut target = Url::parse(url)
            .map_err(|e| CoreError::NetworkError(format!("Invalid URL {url}: {e}")))?;

        for _ in 0..=MAX_SOFT_REDIRECTS {
            let response = self
                .client
                .get(target.clone())
                .send()
                .await
                .map_err(|e| CoreError::NetworkError(format!("Request to {target} failed: {e}")))?;
            let final_url = response.url().clone();
            let status = response.status().as_u16();
            let body = response.text().await.map_err(|e| {
                CoreError::NetworkError(format!("Failed to read {final_url}: {e}"))
            })?;

            let next = (body.len() <= SOFT_REDIRECT_MAX_BODY)
                .then(|| soft_redirect(&final_url, &body))
                .flatten()
                .filter(|next| *next != final_url);
            match next {
                Some(next) => {
                    log::debug!("Soft redirect {final_url} -> {next}");
                    target = next;
                }
                None => {
                    log::debug!("{url} -> {final_url} ({status})");
                    return Ok(FetchedPage {
                        final_url,
                        status,
                        body,
                    });
                }
            }
        }

        Err(CoreError::NetworkError(format!(
            "Too many page redirects starting from {url}"
        )))
    }

    /// 连通性判断：(是否已连接, 描述)
    async fn connectivity(&self) -> CoreResult<(bool, String)> {
        let page = self.fetch(&self.probe.connectivity_url).await?;
        let reached_site = Url::parse(&self.probe.connectivity_url)
            .is_ok_and(|expected| expected.origin() == page.final_url.origin());
        let title_matches = !self.probe.connectivity_title.is_empty()
            && page_title(&page.body).contains(&self.probe.connectivity_title);

        if reached_site || title_matches {
            Ok((true, "Connected, the internet is reachable".to_string()))
        } else if is_login_page(page.final_url.as_str()) {
            Ok((
                false,
                format!(
                    "Authentication required, redirected to login page: {}",
                    page.final_url
                ),
            ))
        } else {
            Ok((
                false,
                format!("Network state unknown, final URL: {}", page.final_url),
            ))
        }
    }

    async fn saved_settings(&self) -> CoreResult<SettingsRecord> {
        let record = self.settings_store.load().await?;
        if record.webindex.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Login URL is not configured".to_string(),
            ));
        }
        Ok(record)
    }
}

fn found(flag: bool) -> &'static str {
    if flag {
        "found"
    } else {
        "not found"
    }
}

#[async_trait]
impl NetworkAccess for HttpNetworkAccess {
    async fn test_connectivity(&self) -> CoreResult<String> {
        let record = self.saved_settings().await?;
        let page = self.fetch(&record.webindex).await?;
        let form = LoginForm::inspect(&page.body);

        let report = format!(
            "Connection test result:\n- Page load: OK ({} {})\n- Username input: {}\n- Password input: {}",
            page.status,
            page.final_url,
            found(form.has_username()),
            found(form.has_password()),
        );
        log::info!("{report}");
        Ok(report)
    }

    async fn perform_login(&self) -> CoreResult<()> {
        let record = self.saved_settings().await?;
        let page = self.fetch(&record.webindex).await?;
        let form = LoginForm::inspect(&page.body);

        let action = match form.action.as_deref() {
            Some(action) => page.final_url.join(action).map_err(|e| {
                CoreError::AuthError(format!("Invalid form action {action}: {e}"))
            })?,
            None => page.final_url.clone(),
        };
        let username_field = form.username_field.as_deref().unwrap_or("username");
        let password_field = form.password_field.as_deref().unwrap_or("password");

        let mut fields = vec![
            (username_field, record.countindex.as_str()),
            (password_field, record.passwordindex.as_str()),
        ];
        if !record.operatorindex.is_empty() {
            fields.push(("service", record.operatorindex.as_str()));
        }

        log::info!("Submitting login form to {action}");
        let response = self
            .client
            .post(action.clone())
            .form(&fields)
            .send()
            .await
            .map_err(|e| CoreError::NetworkError(format!("Login request to {action} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::AuthError(format!(
                "Portal responded with HTTP {}",
                status.as_u16()
            )));
        }
        let body = response.text().await.map_err(|e| {
            CoreError::NetworkError(format!("Failed to read login response from {action}: {e}"))
        })?;
        if LoginForm::inspect(&body).has_password() {
            return Err(CoreError::AuthError(
                "Portal returned the login form again, credentials were likely rejected"
                    .to_string(),
            ));
        }
        Ok(())
    }

    async fn detect_login_page(&self) -> CoreResult<String> {
        log::info!("Detecting campus login page...");
        let mut last_error: Option<CoreError> = None;

        for probe in &self.probe.probe_urls {
            log::debug!("Probing {probe}");
            match self.fetch(probe).await {
                Ok(page) if is_login_page(page.final_url.as_str()) => {
                    log::info!("Found login page: {}", page.final_url);
                    return Ok(page.final_url.to_string());
                }
                Ok(_) => {}
                Err(e) => last_error = Some(e),
            }
        }

        Err(CoreError::DetectionError(match last_error {
            Some(e) => format!("No login page found, last error: {e}"),
            None => "No login page found".to_string(),
        }))
    }

    async fn get_network_status(&self) -> CoreResult<NetworkStatus> {
        let (connected, connectivity_result) = self.connectivity().await?;
        let mut status = NetworkStatus {
            connected,
            connectivity_result,
            ..NetworkStatus::default()
        };

        if !connected {
            match self.detect_login_page().await {
                Ok(url) => {
                    status.needs_authentication = true;
                    status.login_url = Some(url);
                }
                Err(e) => status.detection_error = Some(e.to_string()),
            }
        }
        Ok(status)
    }
}
