use axum::{extract::State, response::Html, routing::get, Router};
use crate::models::AppState;

pub fn router(state: AppState) -> Router {
    Router::new().route("/", get(index)).with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_home(state.current_token().is_some()))
}

/// Home page with the search form and the two authentication paths.
pub fn render_home(authenticated: bool) -> String {
    let banner = if authenticated {
        r#"<p class="ok">Authenticated. You can search now.</p>"#
    } else {
        r#"<p class="warn">Not authenticated yet. Use one of the options below first.</p>"#
    };

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Ops Explorer - Patent Search</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }}
    h1 {{ margin-bottom: 0.5rem; }}
    .card {{ border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }}
    label {{ display: block; margin-top: 0.75rem; font-weight: 600; }}
    input, select {{ width: 100%; padding: 0.5rem; }}
    button {{ margin-top: 1rem; padding: 0.6rem 1rem; }}
    .ok {{ color: #1a7f37; }}
    .warn {{ color: #9a6700; }}
  </style>
</head>
<body>
  <h1>Ops Explorer</h1>
  <p>Search the EPO Open Patent Services published-data API.</p>
  {banner}

  <div class="card">
    <h2>1) Authenticate</h2>
    <p><a href="/auth">Use server credentials</a> or submit your own:</p>
    <form method="post" action="/toauth">
      <label>Client ID</label>
      <input name="clientId" />
      <label>Client secret</label>
      <input name="clientSecret" type="password" />
      <button type="submit">Get token</button>
    </form>
  </div>

  <div class="card">
    <h2>2) Search</h2>
    <form method="get" action="/results">
      <label>Search by</label>
      <select name="inputList">
        <option value="keyword">Keyword (title)</option>
        <option value="inventor">Inventor</option>
        <option value="applicant">Applicant</option>
        <option value="ipc">IPC class</option>
        <option value="country">Country</option>
        <option value="year">Application year</option>
      </select>
      <label>Search text</label>
      <input name="inputText" placeholder="e.g. battery" />
      <button type="submit">Search</button>
    </form>
  </div>
</body>
</html>"#
    )
}
