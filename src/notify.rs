//! Renders a result record as a chat notification.

use serde_json::Value;

use crate::consts::{SHORT_ID_LEN, truncate_chars};
use crate::record::{ERROR, MESSAGE, MODEL, OUTPUT, ResultRecord, THINKING};

/// Format the notification posted for a finished task. Missing fields fall
/// back to placeholders; this never fails.
pub fn format_message(task_id: &str, record: &ResultRecord) -> String {
    let status = record.status();
    let status_text = record.status_text();
    let message = record
        .text(MESSAGE)
        .unwrap_or_else(|| "No message".to_string());
    let model = record.text(MODEL).unwrap_or_else(|| "unknown".to_string());
    let thinking = record
        .text(THINKING)
        .unwrap_or_else(|| "unknown".to_string());

    let mut out = format!(
        "{} **Task Complete** `{}`\n\
         **Status:** {}\n\
         **Model:** {} ({} thinking)\n\
         **Summary:** {}\n",
        status.glyph(),
        truncate_chars(task_id, SHORT_ID_LEN),
        status_text.to_uppercase(),
        model,
        thinking,
        message,
    );

    if record.get(OUTPUT).is_some_and(is_deliverable)
        && let Some(text) = record.text(OUTPUT)
    {
        out.push_str(&format!("\n**Deliverables:** {}", text));
    }

    if status.is_failure()
        && let Some(error) = record.get(ERROR)
    {
        let text = match error {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        out.push_str(&format!("\n**Error:** {}", text));
    }

    out
}

/// Empty or placeholder outputs aren't worth a line.
fn is_deliverable(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "None",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{STATUS, Status};
    use serde_json::json;

    fn record(value: Value) -> ResultRecord {
        match value {
            Value::Object(map) => ResultRecord::from(map),
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn renders_full_template() {
        let r = record(json!({
            "status": "completed",
            "message": "Fixed",
            "model": "m",
            "thinking": "low",
        }));
        assert_eq!(
            format_message("abc12345-xxxx", &r),
            "✅ **Task Complete** `abc12345`\n\
             **Status:** COMPLETED\n\
             **Model:** m (low thinking)\n\
             **Summary:** Fixed\n"
        );
    }

    #[test]
    fn empty_record_uses_placeholders() {
        let out = format_message("task", &ResultRecord::new());
        assert!(out.starts_with("❓ **Task Complete** `task`"));
        assert!(out.contains("**Status:** UNKNOWN"));
        assert!(out.contains("**Model:** unknown (unknown thinking)"));
        assert!(out.contains("**Summary:** No message"));
        assert!(!out.contains("Deliverables"));
        assert!(!out.contains("**Error:**"));
    }

    #[test]
    fn formatting_is_deterministic() {
        let r = record(json!({"status": "partial", "message": "half", "output": "a.txt"}));
        assert_eq!(format_message("id", &r), format_message("id", &r));
    }

    #[test]
    fn glyph_follows_status() {
        for (status, glyph) in [
            ("success", "✅"),
            ("partial", "⚠️"),
            ("failed", "❌"),
            ("error", "❌"),
            ("timeout", "⏱️"),
            ("mystery", "❓"),
        ] {
            let r = ResultRecord::new().with(STATUS, status);
            assert!(format_message("id", &r).starts_with(glyph), "{status}");
            assert_eq!(r.status().glyph(), Status::parse(status).glyph());
        }
    }

    #[test]
    fn deliverables_line_appended() {
        let r = record(json!({"status": "success", "output": "PR #12"}));
        assert!(format_message("id", &r).ends_with("\n\n**Deliverables:** PR #12"));
    }

    #[test]
    fn none_output_skipped() {
        let r = record(json!({"status": "success", "output": "None"}));
        assert!(!format_message("id", &r).contains("Deliverables"));
    }

    #[test]
    fn empty_or_null_output_skipped() {
        for output in [json!(""), json!(null), json!([]), json!(false)] {
            let r = record(json!({"status": "success", "output": output}));
            assert!(!format_message("id", &r).contains("Deliverables"));
        }
    }

    #[test]
    fn error_line_only_for_failed_statuses() {
        let failed = record(json!({"status": "failed", "error": "disk full"}));
        assert!(format_message("id", &failed).ends_with("\n**Error:** disk full"));

        let errored = record(json!({"status": "error", "error": "boom"}));
        assert!(format_message("id", &errored).contains("**Error:** boom"));

        let partial = record(json!({"status": "partial", "error": "ignored"}));
        assert!(!format_message("id", &partial).contains("**Error:**"));
    }

    #[test]
    fn synthesized_error_without_status_has_no_error_line() {
        let r = ResultRecord::error("Worker spawn timed out");
        let out = format_message("id", &r);
        assert!(out.starts_with("❓"));
        assert!(!out.contains("**Error:**"));
    }

    #[test]
    fn deliverables_then_error() {
        let r = record(json!({"status": "failed", "output": "log.txt", "error": "bad"}));
        let out = format_message("id", &r);
        let deliverables = out.find("Deliverables").unwrap();
        let error = out.find("**Error:**").unwrap();
        assert!(deliverables < error);
    }

    #[test]
    fn short_task_id_is_not_padded() {
        let out = format_message("abc", &ResultRecord::new());
        assert!(out.contains("`abc`"));
    }
}
