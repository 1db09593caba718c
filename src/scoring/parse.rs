use crate::scoring::{ScoredResult, ScoringError};
use once_cell::sync::Lazy;
use regex::Regex;

static CODE_FENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)\A```[A-Za-z]*[ \t]*\r?\n(.*?)\r?\n?```\z").expect("valid code fence regex")
});

pub fn parse_scored_result(text: &str) -> Result<ScoredResult, ScoringError> {
    let body = strip_code_fence(text.trim());
    if body.trim().is_empty() {
        return Err(ScoringError::Empty);
    }

    let result: ScoredResult = serde_json::from_str(body)?;
    result.validate()?;
    tracing::debug!(total = result.total_score, "parsed scored result");
    Ok(result)
}

fn strip_code_fence(text: &str) -> &str {
    CODE_FENCE_RE
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map_or(text, |body| body.as_str())
}
