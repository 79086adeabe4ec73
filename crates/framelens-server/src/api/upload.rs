use axum::{
    extract::{Multipart, State},
    Json,
};

use framelens_analysis::{run_upload_analysis, AnalysisError, UploadRequest};

use super::{AnalyzeResponse, ApiError, AppState};

/// Raw multipart fields as submitted. Shape checks (file present, filename
/// non-empty) happen here; everything else is the pipeline's job.
#[derive(Default)]
struct UploadForm {
    file_name: Option<String>,
    file_bytes: Option<Vec<u8>>,
    llm_type: String,
    gemini_model: String,
    llm_api_key: String,
}

pub(super) async fn analyze_csv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    let form = read_form(multipart).await?;

    let Some(file_bytes) = form.file_bytes else {
        return Err(AnalysisError::NoFileUploaded.into());
    };
    let file_name = form.file_name.unwrap_or_default();
    if file_name.is_empty() {
        return Err(AnalysisError::NoFileSelected.into());
    }

    let gemini_model = if form.gemini_model.is_empty() {
        "gemini-2.5-flash".to_string()
    } else {
        form.gemini_model
    };

    let request = UploadRequest {
        file_name,
        file_bytes,
        llm_type: form.llm_type,
        gemini_model,
        llm_api_key: form.llm_api_key,
    };

    let run = run_upload_analysis(&state.pipeline, &request).await?;
    Ok(Json(AnalyzeResponse::from(run)))
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm, ApiError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
    {
        match field.name() {
            Some("csv_file") => {
                form.file_name = field.file_name().map(ToOwned::to_owned);
                form.file_bytes = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| ApiError::internal(e.to_string()))?
                        .to_vec(),
                );
            }
            Some("llm_type") => {
                form.llm_type = field
                    .text()
                    .await
                    .map_err(|e| ApiError::internal(e.to_string()))?;
            }
            Some("gemini_model") => {
                form.gemini_model = field
                    .text()
                    .await
                    .map_err(|e| ApiError::internal(e.to_string()))?;
            }
            Some("llm_api_key") => {
                form.llm_api_key = field
                    .text()
                    .await
                    .map_err(|e| ApiError::internal(e.to_string()))?;
            }
            _ => {}
        }
    }

    Ok(form)
}
