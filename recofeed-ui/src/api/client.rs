//! HTTP API Client
//!
//! Catalog lookups against the Recofeed REST API, plus the channel URL.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Local storage key overriding the API base
const API_URL_KEY: &str = "recofeed_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Recommendation channel URL for an API base
///
/// `http` becomes `ws` and `https` becomes `wss`.
pub fn ws_url(api_base: &str) -> String {
    let base = api_base.trim_end_matches('/');
    let ws_base = if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{}", rest)
    } else if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{}", rest)
    } else {
        base.to_string()
    };
    format!("{}/ws", ws_base)
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Fetch the products offered in the selection control
pub async fn fetch_products() -> Result<Vec<String>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/v1/products", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let message = match response.json::<ApiError>().await {
            Ok(error) => error.error.message,
            Err(_) => format!("HTTP {}", response.status()),
        };
        return Err(message);
    }

    let result: ProductListResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ws_url() {
        assert_eq!(ws_url("http://localhost:5000"), "ws://localhost:5000/ws");
        assert_eq!(ws_url("https://shop.example/"), "wss://shop.example/ws");
    }
}
