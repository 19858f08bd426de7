use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::info;

use crate::models::{AppState, ResultsParams};
use crate::ops::normalize::{normalize, total_result_count, PatentRecord};
use crate::ops::{client, query};
use crate::types::{AppError, AppResult};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/results", get(get_results))
        .with_state(state)
}

/// Search pipeline: token check, validation, upstream call, normalization,
/// then either the rendered view or the raw payload (`format=json`).
async fn get_results(
    State(state): State<AppState>,
    Query(params): Query<ResultsParams>,
) -> AppResult<Response> {
    // Token check comes first: an unauthenticated search is a 401 even when
    // the query itself is invalid.
    let token = state.current_token().ok_or(AppError::AuthRequired)?;

    let alias = params.input_list.as_deref().unwrap_or_default();
    let text = params.input_text.as_deref().unwrap_or_default();
    let search_query = query::build_query(alias, text)?;
    let page = query::parse_page(params.page.as_deref())?;
    let range = query::build_range(page);

    let raw = client::search_biblio(
        &state.http,
        &state.config.ops.base_url,
        &token,
        &search_query,
        &range,
    )
    .await?;

    if params.format.as_deref() == Some("json") {
        return Ok(Json(raw).into_response());
    }

    let records = normalize(&raw);
    let total = total_result_count(&raw);
    info!(page, count = records.len(), "rendering results page");

    Ok(Html(render_results(&records, page, alias, text, total)).into_response())
}

fn render_results(
    records: &[PatentRecord],
    page: u32,
    alias: &str,
    text: &str,
    total: Option<u64>,
) -> String {
    let rows: String = records
        .iter()
        .map(|record| {
            format!(
                r#"  <div class="card">
    <h2>{country}{doc_number} ({kind})</h2>
    <h3>{title}</h3>
    <p>{abstract_text}</p>
    <p><strong>Applicants:</strong> {applicants}</p>
    <p><strong>Inventors:</strong> {inventors}</p>
  </div>
"#,
                country = escape(&record.country),
                doc_number = escape(&record.doc_number),
                kind = escape(&record.kind),
                title = escape(&record.title),
                abstract_text = escape(&record.abstract_text),
                applicants = escape(&record.applicants.join(", ")),
                inventors = escape(&record.inventors.join(", ")),
            )
        })
        .collect();

    let body = if records.is_empty() {
        "  <p>No results on this page.</p>\n".to_string()
    } else {
        rows
    };

    let heading = match total {
        Some(total) => format!("Results for {} (page {}, {} total)", escape(text), page, total),
        None => format!("Results for {} (page {})", escape(text), page),
    };

    let prev = if page > 1 {
        format!(
            r#"<a href="{}">&laquo; Previous</a> "#,
            results_href(alias, text, page - 1)
        )
    } else {
        String::new()
    };
    // Without a reported total the next link is always offered; OPS is
    // authoritative and simply returns an empty page past the end.
    let has_next = total.map_or(true, |total| (page as u64) * (query::PAGE_SIZE as u64) < total);
    let next = if has_next {
        format!(
            r#"<a href="{}">Next &raquo;</a>"#,
            results_href(alias, text, page.saturating_add(1))
        )
    } else {
        String::new()
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Ops Explorer - Results</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }}
    .card {{ border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }}
    .pager {{ margin: 1rem 0; }}
  </style>
</head>
<body>
  <h1>{heading}</h1>
  <p><a href="/">&larr; New search</a></p>
{body}  <div class="pager">{prev}{next}</div>
</body>
</html>"#
    )
}

fn results_href(alias: &str, text: &str, page: u32) -> String {
    format!(
        "/results?inputList={}&inputText={}&page={}",
        urlencoding::encode(alias),
        urlencoding::encode(text),
        page
    )
}

/// Minimal HTML escaping for interpolated upstream/user text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
