//! Wire shapes exchanged with the interpretation service

use crate::core::types::Language;
use crate::hexagram::cast::CastResult;
use serde::{Deserialize, Serialize};

/// Cast identities and question forwarded to the interpretation service
#[derive(Debug, Clone, Serialize)]
pub struct CastReadingRequest {
    pub question: String,
    pub language: Language,
    pub primary_number: u8,
    pub primary_name: String,
    pub secondary_number: Option<u8>,
    pub secondary_name: Option<String>,
    /// 1-based positions of the moving lines, bottom to top
    pub changing_lines: Vec<u8>,
}

impl CastReadingRequest {
    pub fn new(question: &str, cast: &CastResult, language: Language) -> Self {
        Self {
            question: question.to_string(),
            language,
            primary_number: cast.primary_hexagram.number,
            primary_name: cast.primary_hexagram.name(language).to_string(),
            secondary_number: cast.secondary_hexagram.map(|h| h.number),
            secondary_name: cast
                .secondary_hexagram
                .map(|h| h.name(language).to_string()),
            changing_lines: cast
                .changing_line_indices
                .iter()
                .map(|&i| i as u8 + 1)
                .collect(),
        }
    }
}

/// Structured commentary returned by the interpretation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastInterpretation {
    /// Overall reading for the question
    pub overall: String,
    pub judgment_commentary: String,
    pub image_commentary: String,
    /// One entry per moving line, in cast order
    #[serde(default)]
    pub changing_line_commentaries: Vec<LineCommentary>,
    /// Present only when the cast produced a transformed hexagram
    #[serde(default)]
    pub transformed_commentary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineCommentary {
    /// 1-based line number, bottom to top
    pub line_number: u8,
    pub commentary: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hexagram::line::Line;

    fn cast_of(values: [u8; 6]) -> CastResult {
        let lines = values.map(|v| Line::from_toss_value(v).unwrap());
        CastResult::from_lines(lines).unwrap()
    }

    #[test]
    fn test_request_carries_cast_identities() {
        let cast = cast_of([9, 7, 7, 7, 7, 7]);
        let request = CastReadingRequest::new("Có nên đổi việc?", &cast, Language::Vietnamese);
        assert_eq!(request.primary_number, 1);
        assert_eq!(request.primary_name, "Thuần Càn");
        assert_eq!(request.secondary_number, Some(44));
        assert_eq!(request.changing_lines, vec![1]);
    }

    #[test]
    fn test_request_for_static_cast_has_no_secondary() {
        let cast = cast_of([7, 8, 7, 8, 7, 8]);
        let request = CastReadingRequest::new("?", &cast, Language::English);
        assert_eq!(request.secondary_number, None);
        assert_eq!(request.secondary_name, None);
        assert!(request.changing_lines.is_empty());
    }

    #[test]
    fn test_interpretation_parses_service_json() {
        let json = r#"{
            "overall": "A strong beginning.",
            "judgment_commentary": "The judgment favors persistence.",
            "image_commentary": "Heaven moves with power.",
            "changing_line_commentaries": [
                {"line_number": 1, "commentary": "Hidden dragon, do not act."}
            ],
            "transformed_commentary": "Meeting invites caution."
        }"#;
        let parsed: CastInterpretation = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.changing_line_commentaries.len(), 1);
        assert_eq!(parsed.changing_line_commentaries[0].line_number, 1);
        assert!(parsed.transformed_commentary.is_some());
    }

    #[test]
    fn test_interpretation_without_moving_lines_omits_optionals() {
        let json = r#"{
            "overall": "Settled conditions.",
            "judgment_commentary": "Hold the course.",
            "image_commentary": "Order above and below."
        }"#;
        let parsed: CastInterpretation = serde_json::from_str(json).unwrap();
        assert!(parsed.changing_line_commentaries.is_empty());
        assert!(parsed.transformed_commentary.is_none());
    }
}
