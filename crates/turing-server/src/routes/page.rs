use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{Html, IntoResponse};
use tracing::info;

use crate::extract::{session_cookie_header, session_id_from_headers};
use crate::state::AppState;

/// Load the game page. Every load starts a new session.
pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> impl IntoResponse {
    let previous = session_id_from_headers(&headers);
    let (id, _) = state.sessions.replace(previous, state.start_session());

    info!(session_id = %id, "session started");

    ([session_cookie_header(id)], Html(INDEX_HTML))
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Turing Test</title>
</head>
<body>
<h1>Human or AI?</h1>
<div id="log"></div>
<form id="chat">
  <input id="message" autocomplete="off" placeholder="Say something...">
  <button type="submit">Send</button>
</form>
<button id="reveal">Reveal</button>
<button id="reset">New game</button>
<pre id="result"></pre>
<script>
const log = document.getElementById("log");
const line = (who, text) => {
  const p = document.createElement("p");
  p.textContent = who + ": " + text;
  log.appendChild(p);
};
const post = (path, body) =>
  fetch(path, {
    method: "POST",
    headers: { "Content-Type": "application/json" },
    body: JSON.stringify(body || {}),
  }).then((r) => r.json());

line("system", "Hi! Shall we chat? Ask me anything!");

document.getElementById("chat").addEventListener("submit", async (e) => {
  e.preventDefault();
  const input = document.getElementById("message");
  const message = input.value.trim();
  if (!message) return;
  input.value = "";
  line("you", message);
  const data = await post("/send_message", { message });
  line(data.error ? "error" : "them", data.error || data.response);
});

document.getElementById("reveal").addEventListener("click", async () => {
  const data = await post("/reveal");
  document.getElementById("result").textContent = data.error
    ? data.error
    : "You were talking to: " + data.identity + " (" + data.message_count +
      " messages in " + data.duration + ")";
});

document.getElementById("reset").addEventListener("click", async () => {
  await post("/new_session");
  log.textContent = "";
  document.getElementById("result").textContent = "";
  line("system", "Hi! Shall we chat? Ask me anything!");
});
</script>
</body>
</html>
"#;
