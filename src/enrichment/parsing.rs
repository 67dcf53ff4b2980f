//! JSON extraction and shape validation for service responses.

use super::types::AiAnalysis;
use crate::error::EnrichmentError;

/// Extract a JSON value from model output.
///
/// Accepts raw JSON, a fenced ```` ```json ```` block, a plain fenced block,
/// or the first balanced object or array embedded in prose.
///
/// # Errors
///
/// Returns [`EnrichmentError::JsonParseFailed`] when no JSON can be found.
pub fn extract_json(text: &str) -> Result<serde_json::Value, EnrichmentError> {
    let trimmed = text.trim();

    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    if let Some(json_str) = extract_from_code_block(trimmed, "```json") {
        return parse_json_with_context(&json_str, text);
    }

    if let Some(json_str) = extract_from_code_block(trimmed, "```") {
        return parse_json_with_context(&json_str, text);
    }

    if let Some(json_str) = find_json_in_text(trimmed) {
        return parse_json_with_context(&json_str, text);
    }

    let preview = truncate_for_preview(text, 100);
    Err(EnrichmentError::JsonParseFailed {
        message: format!("No valid JSON found in response: {preview}"),
    })
}

/// Parse model output into an [`AiAnalysis`].
///
/// # Errors
///
/// Returns [`EnrichmentError::JsonParseFailed`] if no JSON is present and
/// [`EnrichmentError::SchemaViolation`] if the JSON has the wrong shape.
pub fn parse_analysis(text: &str) -> Result<AiAnalysis, EnrichmentError> {
    let value = extract_json(text)?;
    serde_json::from_value(value).map_err(|e| EnrichmentError::SchemaViolation {
        message: e.to_string(),
    })
}

fn extract_from_code_block(text: &str, prefix: &str) -> Option<String> {
    let start_idx = text.find(prefix)?;
    let remaining = text[start_idx + prefix.len()..].trim_start();

    let end_idx = remaining.find("```")?;
    let json_str = remaining[..end_idx].trim();

    if json_str.is_empty() {
        return None;
    }

    Some(json_str.to_string())
}

fn find_json_in_text(text: &str) -> Option<String> {
    extract_balanced(text, '{', '}').or_else(|| extract_balanced(text, '[', ']'))
}

fn extract_balanced(text: &str, open: char, close: char) -> Option<String> {
    let start = text.find(open)?;
    let mut depth = 0_i32;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        if ch == '\\' && in_string {
            escape_next = true;
            continue;
        }

        if ch == '"' {
            in_string = !in_string;
            continue;
        }

        if !in_string {
            if ch == open {
                depth += 1;
            } else if ch == close {
                depth -= 1;
                if depth == 0 {
                    return Some(text[start..=start + i].to_string());
                }
            }
        }
    }

    None
}

fn parse_json_with_context(
    json_str: &str,
    original: &str,
) -> Result<serde_json::Value, EnrichmentError> {
    serde_json::from_str(json_str).map_err(|e| {
        let preview = truncate_for_preview(original, 100);
        EnrichmentError::JsonParseFailed {
            message: format!("Failed to parse JSON: {e}. Preview: {preview}"),
        }
    })
}

fn truncate_for_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{head}...")
    }
}
