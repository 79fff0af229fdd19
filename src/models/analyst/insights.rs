use super::types::AnalysisResult;

/// Append a templated elaboration to the analyst's explanation.
///
/// The output is always strictly longer than the input explanation; the
/// deck builder uses it as the slide body text.
pub fn enhance(result: &AnalysisResult, topic: &str) -> String {
    let points = result.rows.len();
    let noun = if points == 1 { "data point" } else { "data points" };
    format!(
        "{} This {} view of {} is based on {} {} and carries {:.0}% confidence.",
        result.explanation,
        result.metadata.query_type,
        topic.to_lowercase(),
        points,
        noun,
        result.metadata.confidence * 100.0,
    )
}
