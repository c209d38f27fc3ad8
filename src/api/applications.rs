//! 求职材料端点
//!
//! 生成简历/求职信，以及两者的 PDF 导出。

use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};
use crate::models::{ApplicationRequest, ApplicationResponse, DownloadParams};
use crate::services::{ApplicationService, PdfService, PromptService};
use crate::state::AppState;

/// 生成求职材料
///
/// 一次补全调用产出简历与求职信两部分，按固定标记拆分。
async fn generate_application(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ApplicationRequest>,
) -> AppResult<Json<ApplicationResponse>> {
    // 解码上传的简历文件（暂不参与生成）
    let resume_bytes = STANDARD
        .decode(&req.resume_file)
        .map_err(|e| AppError::BadRequest(format!("resume_file is not valid base64: {}", e)))?;
    debug!("Decoded resume file: {} bytes", resume_bytes.len());

    info!("Application request: job_description={} chars", req.job_description.len());

    let messages = PromptService::new().build_application_messages(&req.job_description);
    let output = state.llm.chat_completion(messages).await?;

    let application = ApplicationService::new().format_application(&output);

    Ok(Json(ApplicationResponse {
        success: true,
        application,
    }))
}

/// 下载求职申请 PDF
async fn download_application(Query(params): Query<DownloadParams>) -> AppResult<impl IntoResponse> {
    let bytes = PdfService::new().render_application(&params.resume, &params.cover_letter)?;
    info!("Rendered application PDF: {} bytes", bytes.len());

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=application.pdf",
            ),
        ],
        bytes,
    ))
}

/// 创建求职材料路由
pub fn applications_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/v1/applications/generate", post(generate_application))
        .route("/api/v1/applications/download", get(download_application))
}
