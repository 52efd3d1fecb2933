//! Rendering of action outcomes into named output areas.
//!
//! The page addresses its elements by id; here the same ids key into an
//! [`OutputSink`] supplied by the caller, so the request logic never looks
//! anything up on its own.

use std::collections::HashMap;
use std::fmt;
use std::io::Write;
use std::sync::Mutex;

pub const CREATE_CONTACT_FORM_ID: &str = "createContactForm";
pub const CREATE_RESULT_ID: &str = "createResult";
pub const GET_TOKEN_ID: &str = "getToken";
pub const CONTACTS_RESULT_ID: &str = "contactsResult";
pub const HEALTH_RESULT_ID: &str = "healthResult";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Success,
    Error,
}

impl DisplayKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for DisplayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one client action, addressed to an output area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultDisplay {
    pub target_id: String,
    pub kind: DisplayKind,
    pub text: String,
}

impl ResultDisplay {
    pub fn success(target_id: &str, text: impl Into<String>) -> Self {
        Self {
            target_id: target_id.to_string(),
            kind: DisplayKind::Success,
            text: text.into(),
        }
    }

    pub fn error(target_id: &str, text: impl Into<String>) -> Self {
        Self {
            target_id: target_id.to_string(),
            kind: DisplayKind::Error,
            text: text.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == DisplayKind::Success
    }

    /// Class attribute used for styling, e.g. `result error`.
    pub fn class_name(&self) -> String {
        format!("result {}", self.kind)
    }
}

/// Destination for rendered results. `text` is plain text, never markup.
pub trait OutputSink: Send + Sync {
    fn write(&self, target_id: &str, class_name: &str, text: &str);
}

pub fn render(display: &ResultDisplay, sink: &dyn OutputSink) {
    sink.write(&display.target_id, &display.class_name(), &display.text);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedNode {
    pub class_name: String,
    pub text: String,
}

/// Keeps the latest write per target id. A later write replaces an earlier
/// one, the same as repeated writes to one element.
#[derive(Debug, Default)]
pub struct MemorySink {
    nodes: Mutex<HashMap<String, RenderedNode>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, target_id: &str) -> Option<RenderedNode> {
        self.nodes
            .lock()
            .ok()
            .and_then(|nodes| nodes.get(target_id).cloned())
    }
}

impl OutputSink for MemorySink {
    fn write(&self, target_id: &str, class_name: &str, text: &str) {
        if let Ok(mut nodes) = self.nodes.lock() {
            nodes.insert(
                target_id.to_string(),
                RenderedNode {
                    class_name: class_name.to_string(),
                    text: text.to_string(),
                },
            );
        }
    }
}

/// Writes each result as a `[target] class` header followed by the text.
pub struct TerminalSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> TerminalSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(writer) => writer,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl TerminalSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> OutputSink for TerminalSink<W> {
    fn write(&self, target_id: &str, class_name: &str, text: &str) {
        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        let written = writeln!(writer, "[{}] {}\n{}", target_id, class_name, text)
            .and_then(|_| writer.flush());
        if let Err(e) = written {
            tracing::warn!("Failed to write result for {}: {}", target_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sets_text_and_class() {
        let sink = MemorySink::new();
        render(&ResultDisplay::error(CONTACTS_RESULT_ID, "boom"), &sink);

        let node = sink.get(CONTACTS_RESULT_ID).unwrap();
        assert_eq!(node.class_name, "result error");
        assert_eq!(node.text, "boom");
        assert!(sink.get(CREATE_RESULT_ID).is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let sink = MemorySink::new();
        render(&ResultDisplay::error(CREATE_RESULT_ID, "first"), &sink);
        render(&ResultDisplay::success(CREATE_RESULT_ID, "second"), &sink);

        let node = sink.get(CREATE_RESULT_ID).unwrap();
        assert_eq!(node.class_name, "result success");
        assert_eq!(node.text, "second");
    }

    #[derive(Default)]
    struct FailingFlush(Vec<u8>);

    impl Write for FailingFlush {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_terminal_sink_survives_flush_failure() {
        let sink = TerminalSink::new(FailingFlush::default());
        render(&ResultDisplay::success(CREATE_RESULT_ID, "{}"), &sink);
        render(&ResultDisplay::error(CREATE_RESULT_ID, "again"), &sink);

        let output = String::from_utf8(sink.into_inner().0).unwrap();
        assert_eq!(
            output,
            "[createResult] result success\n{}\n[createResult] result error\nagain\n"
        );
    }

    #[test]
    fn test_terminal_sink_keeps_markup_literal() {
        let sink = TerminalSink::new(Vec::new());
        render(
            &ResultDisplay::success(CREATE_RESULT_ID, "<b>{\"id\": \"1\"}</b>"),
            &sink,
        );

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "[createResult] result success\n<b>{\"id\": \"1\"}</b>\n");
    }
}
