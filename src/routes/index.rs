use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Landing page used by the browser acceptance suite.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
