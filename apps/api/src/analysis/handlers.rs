//! Axum route handlers for the career analysis API.
//!
//! Handlers own boundary validation: structurally malformed bodies are
//! rejected by serde before they get here, empty required fields are
//! rejected here. The engine and analyst below assume well-formed input.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::analysis::aggregator::generate_full_analysis;
use crate::analysis::models::{ChatReply, Course, Curriculum, FullAnalysis, GapAnalysis, MarketInsights};
use crate::catalog::JobRecord;
use crate::engine;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillsRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryImpactRequest {
    pub skills: Vec<String>,
    pub new_skill: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumRequest {
    pub skills_to_learn: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub role: String,
    pub analysis: FullAnalysis,
    pub question: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub target_skill: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

fn default_level() -> String {
    "beginner".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchJobsResponse {
    pub qualified_jobs: Vec<JobRecord>,
}

#[derive(Debug, Serialize)]
pub struct GapAnalysisResponse {
    pub analysis: GapAnalysis,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryImpactResponse {
    pub potential_salary_increase: u64,
}

#[derive(Debug, Serialize)]
pub struct CurriculumResponse {
    pub curriculum: Curriculum,
}

#[derive(Debug, Serialize)]
pub struct MarketInsightsResponse {
    pub insights: MarketInsights,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub chat: ChatReply,
}

#[derive(Debug, Serialize)]
pub struct CourseResponse {
    pub course: Course,
}

#[derive(Debug, Serialize)]
pub struct FullAnalysisResponse {
    pub analysis: FullAnalysis,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /match-jobs
///
/// Pure subset matching against the catalog — no model call.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<MatchJobsResponse>, AppError> {
    let qualified_jobs = engine::qualified_jobs(&request.skills, state.catalog.jobs());
    Ok(Json(MatchJobsResponse { qualified_jobs }))
}

/// POST /opportunity-gap-analysis
///
/// Computes the jobs out of reach, then asks the analyst which skills would
/// unlock the most.
pub async fn handle_gap_analysis(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<GapAnalysisResponse>, AppError> {
    let unqualified = engine::unqualified_jobs(&request.skills, state.catalog.jobs());
    let analysis = state
        .analyst
        .gap_analysis(&request.skills, &unqualified)
        .await?;
    Ok(Json(GapAnalysisResponse { analysis }))
}

/// POST /salary-impact-calculator
///
/// Deterministic salary arithmetic — no model call.
pub async fn handle_salary_impact(
    State(state): State<AppState>,
    Json(request): Json<SalaryImpactRequest>,
) -> Result<Json<SalaryImpactResponse>, AppError> {
    if request.new_skill.trim().is_empty() {
        return Err(AppError::Validation("newSkill cannot be empty".to_string()));
    }

    let potential_salary_increase =
        engine::salary_impact(&request.skills, &request.new_skill, state.catalog.jobs());
    Ok(Json(SalaryImpactResponse {
        potential_salary_increase,
    }))
}

/// POST /generate-curriculum
pub async fn handle_generate_curriculum(
    State(state): State<AppState>,
    Json(request): Json<CurriculumRequest>,
) -> Result<Json<CurriculumResponse>, AppError> {
    if request.skills_to_learn.is_empty() {
        return Err(AppError::Validation(
            "skillsToLearn cannot be empty".to_string(),
        ));
    }

    let curriculum = state.analyst.learning_path(&request.skills_to_learn).await?;
    Ok(Json(CurriculumResponse { curriculum }))
}

/// POST /market-insights
pub async fn handle_market_insights(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<MarketInsightsResponse>, AppError> {
    let qualified = engine::qualified_jobs(&request.skills, state.catalog.jobs());
    let insights = state
        .analyst
        .market_insights(&request.skills, &qualified)
        .await?;
    Ok(Json(MarketInsightsResponse { insights }))
}

/// POST /coach-chat
///
/// Answers a question grounded in a prior full analysis, under the
/// caller-supplied coach persona.
pub async fn handle_coach_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.question.trim().is_empty() {
        return Err(AppError::Validation("question cannot be empty".to_string()));
    }
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let chat = state
        .analyst
        .coach_chat(&request.role, &request.analysis, &request.question)
        .await?;
    Ok(Json(ChatResponse { chat }))
}

/// POST /generate-course
pub async fn handle_generate_course(
    State(state): State<AppState>,
    Json(request): Json<CourseRequest>,
) -> Result<Json<CourseResponse>, AppError> {
    if request.target_skill.trim().is_empty() {
        return Err(AppError::Validation(
            "targetSkill cannot be empty".to_string(),
        ));
    }

    let course = state
        .analyst
        .course_outline(&request.target_skill, &request.level, &request.skills)
        .await?;
    Ok(Json(CourseResponse { course }))
}

/// POST /generate-full-analysis
///
/// The whole pipeline in one call. In offline mode the canned analyst
/// answers and the response shape is identical.
pub async fn handle_full_analysis(
    State(state): State<AppState>,
    Json(request): Json<SkillsRequest>,
) -> Result<Json<FullAnalysisResponse>, AppError> {
    let analysis =
        generate_full_analysis(&state.catalog, state.analyst.as_ref(), &request.skills).await?;
    Ok(Json(FullAnalysisResponse { analysis }))
}
