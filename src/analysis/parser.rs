use crate::models::AnalysisResult;

use super::AnalysisError;

/// Locate one JSON object in free-form model output.
///
/// Scans to the first `{` and walks forward tracking brace depth, string
/// state, and escapes, returning the balanced slice. Text before and
/// after the object (prose, code fences) is ignored.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let bytes = text.as_bytes();

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, &byte) in bytes[start..].iter().enumerate() {
        if escaped {
            escaped = false;
            continue;
        }
        match byte {
            b'\\' if in_string => escaped = true,
            b'"' => in_string = !in_string,
            b'{' if !in_string => depth += 1,
            b'}' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse the model reply into an [`AnalysisResult`].
/// Missing or malformed JSON is an error; no repair or retry is attempted.
pub fn parse_analysis_response(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let json = extract_json_object(text).ok_or(AnalysisError::MissingJson)?;
    serde_json::from_str(json).map_err(|e| AnalysisError::JsonParsing(e.to_string()))
}

/// Parse the preventive-recommendations reply: one recommendation per
/// line, blanks discarded, common list bullets stripped.
pub fn parse_preventive_response(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| {
            line.trim()
                .trim_start_matches(['-', '*', '•'])
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect()
}
