use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use notify::{Event, RecursiveMode, Watcher};
use serde::Serialize;
use tower_livereload::LiveReloadLayer;

use crate::classes::generate_all_breakpoints;
use crate::export::{to_css, to_html};
use crate::patch::StylePatch;
use crate::preview::{coerce_tag, lint, preview_styles};
use crate::session::EditorSession;
use crate::state::Breakpoint;
use crate::styles::generate_styles;

struct DevState {
    state_path: PathBuf,
}

/// Start the dev server with hot-reload for a state JSON file.
pub async fn run_dev_server(path: PathBuf, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let state = Arc::new(Mutex::new(DevState {
        state_path: path.clone(),
    }));

    let livereload = LiveReloadLayer::new();
    let reloader = livereload.reloader();

    // File watcher
    let mut watcher = notify::recommended_watcher(move |res: Result<Event, _>| {
        if let Ok(event) = res {
            if event.kind.is_modify() {
                reloader.reload();
            }
        }
    })?;
    watcher.watch(path.parent().unwrap_or(path.as_ref()), RecursiveMode::NonRecursive)?;

    let app = Router::new()
        .route("/", get(serve_preview))
        .route("/export.html", get(serve_export_html))
        .route("/export.css", get(serve_export_css))
        .route("/classes", get(serve_classes))
        .route("/state.json", get(serve_state))
        .route("/apply", post(serve_apply))
        .layer(livereload)
        .with_state(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    eprintln!("stylekit dev server");
    eprintln!("  file:     {}", path.display());
    eprintln!("  preview:  http://localhost:{port}/");
    eprintln!("  html:     http://localhost:{port}/export.html");
    eprintln!("  css:      http://localhost:{port}/export.css");
    eprintln!("  watching for changes...");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    drop(watcher);
    Ok(())
}

// ── Session loading ───────────────────────────────────────────────────

fn load_session(state: &Arc<Mutex<DevState>>) -> Result<EditorSession, String> {
    let state_path = state
        .lock()
        .map_err(|e| format!("Lock error: {e}"))?
        .state_path
        .clone();
    let json = std::fs::read_to_string(&state_path).map_err(|e| format!("Read error: {e}"))?;
    EditorSession::from_json(&json).map_err(|e| format!("{e}"))
}

// ── Route handlers ────────────────────────────────────────────────────

async fn serve_preview(State(state): State<Arc<Mutex<DevState>>>) -> Html<String> {
    match load_session(&state) {
        Ok(session) => Html(build_preview_page(&session)),
        Err(e) => Html(build_error_page(&e)),
    }
}

async fn serve_export_html(
    State(state): State<Arc<Mutex<DevState>>>,
) -> ([(axum::http::header::HeaderName, &'static str); 1], String) {
    let body = match load_session(&state) {
        Ok(session) => {
            let effective = session.resolve(Breakpoint::Base);
            let classes = generate_all_breakpoints(&session);
            to_html(&effective, &classes, &generate_styles(&effective))
        }
        Err(e) => format!("<!-- {e} -->"),
    };
    ([(axum::http::header::CONTENT_TYPE, "text/plain; charset=utf-8")], body)
}

async fn serve_export_css(
    State(state): State<Arc<Mutex<DevState>>>,
) -> ([(axum::http::header::HeaderName, &'static str); 1], String) {
    let body = match load_session(&state) {
        Ok(session) => to_css(&session.resolve(Breakpoint::Base)),
        Err(e) => format!("/* {e} */"),
    };
    ([(axum::http::header::CONTENT_TYPE, "text/css; charset=utf-8")], body)
}

async fn serve_classes(State(state): State<Arc<Mutex<DevState>>>) -> String {
    match load_session(&state) {
        Ok(session) => generate_all_breakpoints(&session),
        Err(e) => format!("error: {e}"),
    }
}

async fn serve_state(
    State(state): State<Arc<Mutex<DevState>>>,
) -> ([(axum::http::header::HeaderName, &'static str); 1], String) {
    let body = match load_session(&state) {
        Ok(session) => {
            serde_json::to_string_pretty(&session).unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}"))
        }
        Err(e) => format!("{{\"error\":\"{e}\"}}"),
    };
    ([(axum::http::header::CONTENT_TYPE, "application/json")], body)
}

// ── POST /apply — patch the state file ────────────────────────────────

#[derive(Serialize)]
struct ApplyResponse {
    ok: bool,
    error: Option<String>,
}

async fn serve_apply(
    State(state): State<Arc<Mutex<DevState>>>,
    axum::Json(patch): axum::Json<StylePatch>,
) -> axum::Json<ApplyResponse> {
    let mut session = match load_session(&state) {
        Ok(s) => s,
        Err(e) => {
            return axum::Json(ApplyResponse {
                ok: false,
                error: Some(e),
            });
        }
    };
    session.apply_patch(&patch);

    let state_path = match state.lock() {
        Ok(s) => s.state_path.clone(),
        Err(e) => {
            return axum::Json(ApplyResponse {
                ok: false,
                error: Some(format!("Lock error: {e}")),
            });
        }
    };
    let json = match serde_json::to_string_pretty(&session) {
        Ok(j) => j,
        Err(e) => {
            return axum::Json(ApplyResponse {
                ok: false,
                error: Some(format!("Serialize error: {e}")),
            });
        }
    };
    match std::fs::write(&state_path, json) {
        Ok(()) => axum::Json(ApplyResponse {
            ok: true,
            error: None,
        }),
        Err(e) => axum::Json(ApplyResponse {
            ok: false,
            error: Some(format!("Write error: {e}")),
        }),
    }
}

// ── Page builders ─────────────────────────────────────────────────────

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

fn build_preview_page(session: &EditorSession) -> String {
    let effective = session.resolve(session.current_breakpoint());
    let tag = coerce_tag(&effective.tag);
    let classes = generate_all_breakpoints(session);
    let styles = preview_styles(&effective);
    let css = to_css(&effective);
    let html_export = to_html(&effective, &classes, &generate_styles(&effective));
    let warnings = lint(&effective);

    let warning_items: String = warnings
        .iter()
        .map(|w| format!("<li>{}</li>", escape_html(w)))
        .collect();
    let warnings_block = if warnings.is_empty() {
        String::new()
    } else {
        format!("<ul class=\"warnings\">{warning_items}</ul>")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>stylekit preview</title>
<style>
* {{ margin: 0; padding: 0; box-sizing: border-box; }}
html, body {{ width: 100%; height: 100%; background: #0A0A0A; color: #A0A0A0;
  font-family: 'JetBrains Mono', monospace; font-size: 12px; }}
.toolbar {{ height: 36px; display: flex; align-items: center; padding: 0 14px;
  border-bottom: 1px solid #2A2A2A; font-size: 11px; gap: 10px; user-select: none; }}
.toolbar .tag {{ color: #D4AF37; font-weight: 600; }}
.toolbar .badge {{ background: #1F1F1F; padding: 2px 8px; border-radius: 3px; font-size: 10px; }}
.warnings {{ list-style: none; padding: 6px 14px; border-bottom: 1px solid #2A2A2A;
  color: #F59E0B; font-size: 11px; }}
.stage {{ display: flex; align-items: center; justify-content: center;
  min-height: 45vh; padding: 32px; border-bottom: 1px solid #2A2A2A; }}
.panes {{ display: grid; grid-template-columns: 1fr 1fr; gap: 0; }}
.pane {{ padding: 12px 14px; overflow: auto; border-right: 1px solid #2A2A2A; }}
.pane h3 {{ color: #666; font-size: 10px; text-transform: uppercase;
  letter-spacing: 1px; margin-bottom: 8px; }}
.pane pre {{ white-space: pre-wrap; word-break: break-all; line-height: 1.6; color: #A0A0A0; }}
</style>
</head>
<body>
<div class="toolbar">
  <span class="tag">&lt;{tag}&gt;</span>
  <span class="badge">{breakpoint}</span>
  <span class="badge">{class_count} classes</span>
</div>
{warnings_block}
<div class="stage">
  <{tag} style="{inline}">{text}</{tag}>
</div>
<div class="panes">
  <div class="pane"><h3>Classes</h3><pre>{classes_escaped}</pre></div>
  <div class="pane"><h3>HTML</h3><pre>{html_escaped}</pre></div>
  <div class="pane"><h3>CSS</h3><pre>{css_escaped}</pre></div>
</div>
</body>
</html>
"#,
        breakpoint = session.current_breakpoint().as_str(),
        class_count = classes.split_whitespace().count(),
        inline = escape_html(&styles.to_css_text()).replace('"', "&quot;"),
        text = escape_html(&effective.text_content),
        classes_escaped = escape_html(&classes),
        html_escaped = escape_html(&html_export),
        css_escaped = escape_html(&css),
    )
}

fn build_error_page(error: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>stylekit error</title>
<style>
body {{ background: #0A0A0A; color: #EF4444; font-family: 'JetBrains Mono', monospace;
  padding: 32px; font-size: 13px; }}
pre {{ white-space: pre-wrap; }}
</style></head>
<body><pre>{}</pre></body>
</html>
"#,
        escape_html(error)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_page_renders_the_element_and_panes() {
        let mut session = EditorSession::new();
        session.apply_patch(&StylePatch {
            tag: Some("button".into()),
            text_content: Some("Click".into()),
            ..Default::default()
        });
        session.apply_patch(&StylePatch::background_color(Some("#112233")));

        let page = build_preview_page(&session);
        assert!(page.contains("<button style="));
        assert!(page.contains("background-color: #112233"));
        assert!(page.contains("&lt;button&gt;"));
        assert!(page.contains("relative"));
    }

    #[test]
    fn error_page_escapes_the_message() {
        let page = build_error_page("bad <tag> & worse");
        assert!(page.contains("bad &lt;tag&gt; &amp; worse"));
    }
}
