use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use tulip_sentiment::BatchAnalysis;

use crate::middleware::RequestId;

use super::{normalize_top_n, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalysisRequest {
    texts: Vec<String>,
    #[serde(default)]
    top_n: Option<usize>,
}

pub(super) async fn analyze_texts(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalysisRequest>,
) -> Result<Json<ApiResponse<BatchAnalysis>>, ApiError> {
    if request.texts.len() > state.max_batch_texts {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!(
                "at most {} texts may be analyzed per request, got {}",
                state.max_batch_texts,
                request.texts.len()
            ),
        ));
    }

    if let Some((index, chars)) = request
        .texts
        .iter()
        .map(|text| text.chars().count())
        .enumerate()
        .find(|&(_, chars)| chars > state.max_text_chars)
    {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            format!(
                "text at index {index} is {chars} characters long; limit is {}",
                state.max_text_chars
            ),
        ));
    }

    let top_n = normalize_top_n(request.top_n, state.default_top_n);
    let analysis = state.analyzer.analyze_batch(&request.texts, top_n);

    tracing::info!(
        request_id = %req_id.0,
        texts = analysis.summary.total_analyzed,
        average_score = analysis.summary.average_score,
        dominant_label = %analysis.summary.dominant_label,
        "analysis batch complete"
    );

    Ok(Json(ApiResponse {
        data: analysis,
        meta: ResponseMeta::new(req_id.0),
    }))
}
