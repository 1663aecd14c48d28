//! Тонкая обёртка над fetch: базовый URL, JSON заголовки, маппинг статусов.
//!
//! Все ошибки схлопываются в `String` — страницы показывают их как alert,
//! типизированная таксономия ошибок на этом слое не нужна.

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Базовый URL REST API, выводится из location текущего окна.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

async fn fetch_text(method: &str, path: &str, body: Option<String>) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(body));
    }

    let url = format!("{}{}", api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|e| format!("{e:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        let status = resp.status();
        let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_else(|| "Unknown error".to_string());
        return Err(format!("HTTP {}: {}", status, text));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let text = fetch_text("GET", path, None).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| format!("Ошибка сериализации: {e}"))?;
    let text = fetch_text("POST", path, Some(body)).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| format!("Ошибка сериализации: {e}"))?;
    let text = fetch_text("PUT", path, Some(body)).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn patch_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let body = serde_json::to_string(body).map_err(|e| format!("Ошибка сериализации: {e}"))?;
    let text = fetch_text("PATCH", path, Some(body)).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn delete(path: &str) -> Result<(), String> {
    fetch_text("DELETE", path, None).await.map(|_| ())
}
