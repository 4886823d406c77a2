//! HTTP 传输模块
//!
//! 使用 `web_sys::fetch` 实现核心库的 [`HttpClient`]。
//! 整体截止时间由 `AbortController` + `setTimeout` 实现：到点后中止请求，调用以传输错误失败。

use super::timer::Timeout;
use cyberedu::{ApiError, ApiResult, HttpClient, HttpRequest, HttpResponse};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response};

fn js_error(context: &str, e: JsValue) -> ApiError {
    ApiError::transport(format!("{}: {:?}", context, e))
}

#[derive(Debug, Clone, Copy)]
pub struct FetchHttpClient {
    timeout: Duration,
}

impl FetchHttpClient {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn build_request(req: &HttpRequest, controller: &AbortController) -> ApiResult<Request> {
        let headers = Headers::new().map_err(|e| js_error("创建 Headers 失败", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| js_error("设置 Header 失败", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_signal(Some(&controller.signal()));

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&req.url, &opts).map_err(|e| js_error("构建请求失败", e))
    }

    async fn fetch(req: &Request) -> ApiResult<HttpResponse> {
        let window = web_sys::window().ok_or_else(|| ApiError::transport("无法获取 window 对象"))?;

        let value = JsFuture::from(window.fetch_with_request(req))
            .await
            .map_err(|e| js_error("网络错误", e))?;

        let response: Response = value
            .dyn_into()
            .map_err(|e| js_error("Response 类型转换失败", e))?;

        let status = response.status();
        let text = response.text().map_err(|e| js_error("读取响应失败", e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| js_error("读取响应失败", e))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse { status, body })
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let controller = AbortController::new().map_err(|e| js_error("创建 AbortController 失败", e))?;
        let request = Self::build_request(&req, &controller)?;

        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let timed_out = Rc::new(Cell::new(false));
        let _deadline = {
            let timed_out = timed_out.clone();
            let controller = controller.clone();
            Timeout::new(millis, move || {
                timed_out.set(true);
                controller.abort();
            })
        };

        // 响应体读取也在截止时间之内
        Self::fetch(&request).await.map_err(|e| {
            if timed_out.get() {
                ApiError::transport(format!("timeout of {}ms exceeded", millis))
            } else {
                e
            }
        })
    }
}
