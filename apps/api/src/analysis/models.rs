//! Typed reply shapes for every analyst capability.
//!
//! These structs are the schema check for model output: after code-fence
//! stripping, the reply either deserializes into one of these or the call
//! fails with a response-format error. Nothing partially parsed ever leaves
//! this layer. Field names map to camelCase uniformly at the boundary.

use serde::{Deserialize, Serialize};

use crate::catalog::JobRecord;

/// One skill the user should learn, with the model's reasoning and the
/// estimated salary increase (currency-agnostic numeric unit).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGapRecommendation {
    pub skill: String,
    pub explanation: String,
    pub salary_increase: u64,
}

/// Reply shape for the opportunity-gap-analysis capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub recommendations: Vec<SkillGapRecommendation>,
}

/// One step of a learning path: the skill, where to learn it, and a project
/// to prove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPathItem {
    pub skill: String,
    pub resource: String,
    pub project: String,
}

/// Reply shape for the curriculum capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    pub learning_path: Vec<LearningPathItem>,
}

/// Reply shape for the market-insights capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketInsights {
    pub insights: Vec<String>,
}

/// Reply shape for the coach-chat capability. `follow_ups` is optional in
/// the model reply and defaults to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub answer: String,
    #[serde(default)]
    pub follow_ups: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    pub resource: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseModule {
    pub title: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseProject {
    pub title: String,
    pub brief: String,
}

/// Reply shape for the course-outline capability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub duration: String,
    pub modules: Vec<CourseModule>,
    pub project: CourseProject,
}

/// Current vs potential maximum salary once the recommended skills are
/// acquired. `potential >= current` always.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryProjection {
    pub current: u64,
    pub potential: u64,
}

/// The aggregate produced by the full-analysis pipeline.
///
/// Invariant: `next_level_jobs` are never satisfied by the user's current
/// skills, but become satisfied once the recommended gap skills are added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullAnalysis {
    pub qualified_jobs: Vec<JobRecord>,
    pub market_insights: Vec<String>,
    pub salary_projection: SalaryProjection,
    pub skill_gaps: Vec<SkillGapRecommendation>,
    pub learning_path: Vec<LearningPathItem>,
    pub next_level_jobs: Vec<JobRecord>,
}
