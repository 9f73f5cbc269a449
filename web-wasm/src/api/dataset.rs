//! データセット取得
//!
//! 起動時に1回だけ `/lookalike.json` を GET して Dataset にする。

use lookalike_common::{Dataset, Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// データセットの取得先
pub const DATASET_URL: &str = "/lookalike.json";

/// データセットを取得してパースする
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
    let text = fetch_text(url).await.map_err(js_error)?;
    parse_dataset(&text)
}

/// レスポンス本文をDatasetに変換
pub fn parse_dataset(text: &str) -> Result<Dataset> {
    Dataset::from_json(text)
}

async fn fetch_text(url: &str) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {} ({})", resp.status(), url)));
    }

    let text = JsFuture::from(resp.text()?).await?;
    text.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not a string"))
}

fn js_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Fetch(message)
}
