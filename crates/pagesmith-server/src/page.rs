//! The chat page served at `/`
//!
//! One self-contained HTML document: no build step, no external assets.
//! Generated pages are rendered inline through a sandboxed iframe
//! `srcdoc`, so the model's HTML never executes in the app's origin.

/// The chat UI.
pub const CHAT_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Pagesmith</title>
<style>
  :root { --accent: #2563eb; --border: #e2e8f0; --muted: #64748b; }
  * { box-sizing: border-box; }
  body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
    background: #f8fafc;
    color: #0f172a;
    display: flex;
    flex-direction: column;
    height: 100vh;
  }
  header {
    padding: 16px 24px;
    background: #fff;
    border-bottom: 1px solid var(--border);
  }
  header h1 { margin: 0; font-size: 18px; }
  header p { margin: 4px 0 0; font-size: 13px; color: var(--muted); }
  #log {
    flex: 1;
    overflow-y: auto;
    padding: 24px;
    display: flex;
    flex-direction: column;
    gap: 12px;
  }
  .user {
    align-self: flex-end;
    max-width: 70%;
    background: var(--accent);
    color: #fff;
    padding: 10px 14px;
    border-radius: 12px 12px 2px 12px;
    white-space: pre-wrap;
  }
  .assistant {
    align-self: flex-start;
    width: 85%;
    background: #fff;
    border: 1px solid var(--border);
    border-radius: 12px 12px 12px 2px;
    overflow: hidden;
  }
  .assistant iframe {
    display: block;
    width: 100%;
    height: 420px;
    border: 0;
    background: #fff;
  }
  .assistant details {
    border-top: 1px solid var(--border);
    font-size: 12px;
  }
  .assistant summary { padding: 6px 12px; cursor: pointer; color: var(--muted); }
  .assistant pre {
    margin: 0;
    padding: 12px;
    overflow-x: auto;
    background: #f1f5f9;
    font-size: 12px;
  }
  .error {
    align-self: flex-start;
    background: #fef2f2;
    border: 1px solid #fecaca;
    color: #b91c1c;
    padding: 10px 14px;
    border-radius: 8px;
    font-size: 13px;
  }
  form {
    display: flex;
    gap: 8px;
    padding: 16px 24px;
    background: #fff;
    border-top: 1px solid var(--border);
  }
  input[type="text"] {
    flex: 1;
    padding: 10px 14px;
    font-size: 14px;
    border: 1px solid var(--border);
    border-radius: 8px;
  }
  input[type="text"]:focus { outline: 2px solid var(--accent); border-color: transparent; }
  button {
    padding: 10px 20px;
    font-size: 14px;
    border: 0;
    border-radius: 8px;
    background: var(--accent);
    color: #fff;
    cursor: pointer;
  }
  button:disabled { opacity: 0.5; cursor: wait; }
</style>
</head>
<body>
<header>
  <h1>Pagesmith</h1>
  <p>Describe the webpage you want and it will be generated and rendered below.</p>
</header>
<div id="log"></div>
<form id="composer">
  <input type="text" id="message" placeholder="e.g. a red button that says Hello" autocomplete="off" autofocus>
  <button type="submit" id="send">Generate</button>
</form>
<script>
const log = document.getElementById('log');
const form = document.getElementById('composer');
const input = document.getElementById('message');
const send = document.getElementById('send');

function addUser(text) {
  const div = document.createElement('div');
  div.className = 'user';
  div.textContent = text;
  log.appendChild(div);
  log.scrollTop = log.scrollHeight;
}

function addAssistant(html) {
  const div = document.createElement('div');
  div.className = 'assistant';
  const frame = document.createElement('iframe');
  frame.setAttribute('sandbox', '');
  frame.srcdoc = html;
  div.appendChild(frame);
  const details = document.createElement('details');
  const summary = document.createElement('summary');
  summary.textContent = 'View HTML source';
  const pre = document.createElement('pre');
  pre.textContent = html;
  details.appendChild(summary);
  details.appendChild(pre);
  div.appendChild(details);
  log.appendChild(div);
  log.scrollTop = log.scrollHeight;
}

function addError(text) {
  const div = document.createElement('div');
  div.className = 'error';
  div.textContent = text;
  log.appendChild(div);
  log.scrollTop = log.scrollHeight;
}

async function loadTranscript() {
  try {
    const response = await fetch('/transcript');
    if (!response.ok) return;
    const body = await response.json();
    for (const turn of body.turns) {
      if (turn.role === 'user') addUser(turn.content);
      else addAssistant(turn.content);
    }
  } catch (err) {
    // History replay is best-effort; the composer still works.
  }
}
loadTranscript();

form.addEventListener('submit', async (event) => {
  event.preventDefault();
  const message = input.value.trim();
  if (!message) return;
  addUser(message);
  input.value = '';
  send.disabled = true;
  try {
    const response = await fetch('/chat', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ message }),
    });
    const body = await response.json();
    if (response.ok) {
      addAssistant(body.html);
    } else {
      addError(body.error || ('Request failed with status ' + response.status));
    }
  } catch (err) {
    addError('Request failed: ' + err);
  } finally {
    send.disabled = false;
    input.focus();
  }
});
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_complete_document() {
        assert!(CHAT_PAGE.starts_with("<!DOCTYPE html>"));
        assert!(CHAT_PAGE.contains("</html>"));
        assert!(CHAT_PAGE.contains("<title>Pagesmith</title>"));
    }

    #[test]
    fn test_page_posts_to_chat_endpoint() {
        assert!(CHAT_PAGE.contains("fetch('/chat'"));
        assert!(CHAT_PAGE.contains("JSON.stringify({ message })"));
    }

    #[test]
    fn test_generated_html_is_sandboxed() {
        assert!(CHAT_PAGE.contains("frame.setAttribute('sandbox', '')"));
        assert!(CHAT_PAGE.contains("frame.srcdoc = html"));
    }

    #[test]
    fn test_page_surfaces_errors() {
        assert!(CHAT_PAGE.contains("addError(body.error"));
    }

    #[test]
    fn test_page_replays_transcript_on_load() {
        assert!(CHAT_PAGE.contains("fetch('/transcript')"));
        assert!(CHAT_PAGE.contains("loadTranscript()"));
    }
}
