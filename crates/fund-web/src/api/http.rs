//! Thin fetch wrapper over gloo-net

/// GET a URL and return its body as text. Failures are logged to the browser
/// console and collapse to `None` so callers can treat any miss as fatal for
/// the render cycle.
pub async fn get_text(url: &str) -> Option<String> {
    let response = gloo_net::http::Request::get(url)
        .header("Accept", "text/csv")
        .send()
        .await
        .ok()?;

    if !response.ok() {
        web_sys::console::error_1(
            &format!("HTTP error {} fetching {}", response.status(), url).into(),
        );
        return None;
    }

    response.text().await.ok()
}
