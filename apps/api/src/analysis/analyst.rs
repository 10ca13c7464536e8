//! Career Analyst — pluggable, trait-based backend for every AI capability.
//!
//! Default in live mode: `GeminiAnalyst` (prompts the external model and
//! schema-checks its JSON replies). Offline/dev mode: `CannedAnalyst`
//! (deterministic fixed payloads with the exact same shapes).
//!
//! `AppState` holds an `Arc<dyn CareerAnalyst>`, swapped at startup via
//! the `OFFLINE_MODE` config toggle.

use async_trait::async_trait;
use tracing::info;

use crate::analysis::models::{
    ChatReply, Course, CourseModule, CourseProject, Curriculum, FullAnalysis, GapAnalysis,
    Lesson, LearningPathItem, MarketInsights, SkillGapRecommendation,
};
use crate::analysis::prompts::{
    COACH_CHAT_PERSONA_TEMPLATE, COACH_CHAT_PROMPT_TEMPLATE, COURSE_PERSONA,
    COURSE_PROMPT_TEMPLATE, CURRICULUM_PERSONA, CURRICULUM_PROMPT_TEMPLATE,
    GAP_ANALYSIS_PROMPT_TEMPLATE, MARKET_ANALYST_PERSONA, MARKET_INSIGHTS_PROMPT_TEMPLATE,
};
use crate::catalog::{learning_resource, JobRecord};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::GeminiClient;

const FALLBACK_RESOURCE: &str = "https://www.freecodecamp.org/";

/// The analyst trait. Implement this to swap backends without touching the
/// handlers or the aggregation pipeline.
#[async_trait]
pub trait CareerAnalyst: Send + Sync {
    /// Recommends the highest-impact skills to learn, given the jobs the
    /// user does not qualify for.
    async fn gap_analysis(
        &self,
        skills: &[String],
        unqualified: &[JobRecord],
    ) -> Result<GapAnalysis, AppError>;

    /// Builds a project-based learning path for the given skills.
    async fn learning_path(&self, skills_to_learn: &[String]) -> Result<Curriculum, AppError>;

    /// Produces market observations for the user's profile.
    async fn market_insights(
        &self,
        skills: &[String],
        qualified: &[JobRecord],
    ) -> Result<MarketInsights, AppError>;

    /// Answers a coaching question grounded in a prior analysis.
    async fn coach_chat(
        &self,
        role: &str,
        analysis: &FullAnalysis,
        question: &str,
    ) -> Result<ChatReply, AppError>;

    /// Generates a short course outline for one target skill.
    async fn course_outline(
        &self,
        target_skill: &str,
        level: &str,
        skills: &[String],
    ) -> Result<Course, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiAnalyst — live implementation
// ────────────────────────────────────────────────────────────────────────────

/// Live analyst: builds a prompt per capability, submits it to the model,
/// and parses the JSON reply into the capability's typed shape.
pub struct GeminiAnalyst {
    llm: GeminiClient,
}

impl GeminiAnalyst {
    pub fn new(llm: GeminiClient) -> Self {
        Self { llm }
    }
}

/// Composes a capability persona with the shared JSON-only instruction.
fn system_prompt(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_SYSTEM}")
}

#[async_trait]
impl CareerAnalyst for GeminiAnalyst {
    async fn gap_analysis(
        &self,
        skills: &[String],
        unqualified: &[JobRecord],
    ) -> Result<GapAnalysis, AppError> {
        let prompt = GAP_ANALYSIS_PROMPT_TEMPLATE
            .replace("{skills}", &skill_list(skills)?)
            .replace("{unqualified_jobs}", &jobs_for_prompt(unqualified)?);

        let analysis: GapAnalysis = self
            .llm
            .call_json(&prompt, &system_prompt(MARKET_ANALYST_PERSONA))
            .await?;
        info!(
            "Gap analysis returned {} recommendations",
            analysis.recommendations.len()
        );
        Ok(analysis)
    }

    async fn learning_path(&self, skills_to_learn: &[String]) -> Result<Curriculum, AppError> {
        let prompt = CURRICULUM_PROMPT_TEMPLATE.replace("{skills}", &skill_list(skills_to_learn)?);
        Ok(self
            .llm
            .call_json(&prompt, &system_prompt(CURRICULUM_PERSONA))
            .await?)
    }

    async fn market_insights(
        &self,
        skills: &[String],
        qualified: &[JobRecord],
    ) -> Result<MarketInsights, AppError> {
        let prompt = MARKET_INSIGHTS_PROMPT_TEMPLATE
            .replace("{skills}", &skill_list(skills)?)
            .replace("{qualified_jobs}", &jobs_for_prompt(qualified)?);
        Ok(self
            .llm
            .call_json(&prompt, &system_prompt(MARKET_ANALYST_PERSONA))
            .await?)
    }

    async fn coach_chat(
        &self,
        role: &str,
        analysis: &FullAnalysis,
        question: &str,
    ) -> Result<ChatReply, AppError> {
        let analysis_json = serde_json::to_string_pretty(analysis)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize analysis: {e}")))?;

        let system = system_prompt(&COACH_CHAT_PERSONA_TEMPLATE.replace("{role}", role));
        let prompt = COACH_CHAT_PROMPT_TEMPLATE
            .replace("{analysis}", &analysis_json)
            .replace("{question}", question);

        Ok(self.llm.call_json(&prompt, &system).await?)
    }

    async fn course_outline(
        &self,
        target_skill: &str,
        level: &str,
        skills: &[String],
    ) -> Result<Course, AppError> {
        let prompt = COURSE_PROMPT_TEMPLATE
            .replace("{target_skill}", target_skill)
            .replace("{level}", level)
            .replace("{skills}", &skill_list(skills)?);

        Ok(self
            .llm
            .call_json(&prompt, &system_prompt(COURSE_PERSONA))
            .await?)
    }
}

/// Serializes a skill list for prompt interpolation.
fn skill_list(skills: &[String]) -> Result<String, AppError> {
    serde_json::to_string(skills)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize skills: {e}")))
}

/// Serializes jobs for prompt interpolation, trimmed to the fields the model
/// needs.
fn jobs_for_prompt(jobs: &[JobRecord]) -> Result<String, AppError> {
    serde_json::to_string_pretty(
        &jobs
            .iter()
            .map(|job| {
                serde_json::json!({
                    "title": job.title,
                    "salaryRange": job.salary_range,
                    "requiredSkills": job.required_skills,
                })
            })
            .collect::<Vec<_>>(),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize jobs: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// CannedAnalyst — deterministic offline implementation
// ────────────────────────────────────────────────────────────────────────────

/// Offline analyst returning fixed payloads. Shapes are identical to the
/// live path so callers never know which backend answered.
pub struct CannedAnalyst;

fn has_skill(skills: &[String], name: &str) -> bool {
    skills.iter().any(|s| s.eq_ignore_ascii_case(name))
}

#[async_trait]
impl CareerAnalyst for CannedAnalyst {
    async fn gap_analysis(
        &self,
        skills: &[String],
        _unqualified: &[JobRecord],
    ) -> Result<GapAnalysis, AppError> {
        let mut recommendations = Vec::new();
        if !has_skill(skills, "react") {
            recommendations.push(SkillGapRecommendation {
                skill: "react".to_string(),
                explanation: "Unlock modern frontend roles in Kigali".to_string(),
                salary_increase: 300_000,
            });
        }
        if !has_skill(skills, "git") {
            recommendations.push(SkillGapRecommendation {
                skill: "git".to_string(),
                explanation: "Collaboration and workflows required by most employers".to_string(),
                salary_increase: 50_000,
            });
        }
        Ok(GapAnalysis { recommendations })
    }

    async fn learning_path(&self, skills_to_learn: &[String]) -> Result<Curriculum, AppError> {
        let learning_path = skills_to_learn
            .iter()
            .map(|skill| LearningPathItem {
                skill: skill.clone(),
                resource: learning_resource(skill).unwrap_or(FALLBACK_RESOURCE).to_string(),
                project: format!("Build a mini project to practice {skill}"),
            })
            .collect();
        Ok(Curriculum { learning_path })
    }

    async fn market_insights(
        &self,
        _skills: &[String],
        _qualified: &[JobRecord],
    ) -> Result<MarketInsights, AppError> {
        Ok(MarketInsights {
            insights: vec![
                "Front-end roles are growing in Rwanda with demand for React and TypeScript."
                    .to_string(),
                "Knowledge of Git and collaborative workflows is expected for junior roles."
                    .to_string(),
                "Pay growth is highest for candidates who can ship production-ready UI."
                    .to_string(),
            ],
        })
    }

    async fn coach_chat(
        &self,
        _role: &str,
        _analysis: &FullAnalysis,
        question: &str,
    ) -> Result<ChatReply, AppError> {
        let answer = if question.to_lowercase().contains("next") {
            "Based on your analysis, learn React next to unlock 400-600k RWF roles. \
             Start with components, hooks, and a mini CRUD app."
        } else {
            "Focus on one high-ROI skill, schedule 45 minutes daily, and ship one small \
             project per week."
        };

        Ok(ChatReply {
            answer: answer.to_string(),
            follow_ups: vec![
                "Which skill unlocks the most jobs?".to_string(),
                "Give me a 2-week plan.".to_string(),
                "How do I build a portfolio project?".to_string(),
            ],
        })
    }

    async fn course_outline(
        &self,
        target_skill: &str,
        _level: &str,
        _skills: &[String],
    ) -> Result<Course, AppError> {
        let resource = learning_resource(target_skill)
            .unwrap_or(FALLBACK_RESOURCE)
            .to_string();

        Ok(Course {
            title: format!("{target_skill} in 2 Weeks (Practical)"),
            duration: "2 weeks".to_string(),
            modules: vec![
                CourseModule {
                    title: "Foundations".to_string(),
                    lessons: vec![Lesson {
                        title: "Intro".to_string(),
                        resource: resource.clone(),
                    }],
                },
                CourseModule {
                    title: "Core Concepts".to_string(),
                    lessons: vec![Lesson {
                        title: "Hands-on".to_string(),
                        resource,
                    }],
                },
            ],
            project: CourseProject {
                title: format!("{target_skill} Mini App"),
                brief: "Build and deploy a small app demonstrating key concepts.".to_string(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_canned_gap_analysis_skips_skills_the_user_has() {
        let analysis = CannedAnalyst
            .gap_analysis(&skills(&["react", "git"]), &[])
            .await
            .unwrap();
        assert!(analysis.recommendations.is_empty());
    }

    #[tokio::test]
    async fn test_canned_gap_analysis_recommends_missing_skills() {
        let analysis = CannedAnalyst
            .gap_analysis(&skills(&["html", "css", "javascript"]), &[])
            .await
            .unwrap();
        let names: Vec<&str> = analysis
            .recommendations
            .iter()
            .map(|r| r.skill.as_str())
            .collect();
        assert_eq!(names, vec!["react", "git"]);
        assert!(analysis.recommendations.iter().all(|r| r.salary_increase > 0));
    }

    #[tokio::test]
    async fn test_canned_learning_path_uses_curated_resources() {
        let curriculum = CannedAnalyst
            .learning_path(&skills(&["react", "basket weaving"]))
            .await
            .unwrap();
        assert_eq!(curriculum.learning_path.len(), 2);
        assert_ne!(curriculum.learning_path[0].resource, FALLBACK_RESOURCE);
        assert_eq!(curriculum.learning_path[1].resource, FALLBACK_RESOURCE);
    }

    #[tokio::test]
    async fn test_canned_chat_always_offers_follow_ups() {
        let analysis = FullAnalysis {
            qualified_jobs: vec![],
            market_insights: vec![],
            salary_projection: crate::analysis::models::SalaryProjection {
                current: 0,
                potential: 0,
            },
            skill_gaps: vec![],
            learning_path: vec![],
            next_level_jobs: vec![],
        };
        let reply = CannedAnalyst
            .coach_chat("a career coach", &analysis, "What should I learn next?")
            .await
            .unwrap();
        assert!(!reply.answer.is_empty());
        assert_eq!(reply.follow_ups.len(), 3);
    }

    #[tokio::test]
    async fn test_canned_course_outline_has_modules_and_project() {
        let course = CannedAnalyst
            .course_outline("react", "beginner", &skills(&["javascript"]))
            .await
            .unwrap();
        assert_eq!(course.title, "react in 2 Weeks (Practical)");
        assert_eq!(course.modules.len(), 2);
        assert!(course.modules.iter().all(|m| !m.lessons.is_empty()));
        assert!(!course.project.brief.is_empty());
    }

    #[test]
    fn test_system_prompt_appends_json_only_instruction() {
        let system = system_prompt(MARKET_ANALYST_PERSONA);
        assert!(system.starts_with("You are a career intelligence analyst"));
        assert!(system.contains("valid JSON only"));
    }

    #[test]
    fn test_jobs_for_prompt_is_trimmed_to_model_fields() {
        let catalog = crate::catalog::JobCatalog::bundled();
        let rendered = jobs_for_prompt(catalog.jobs()).unwrap();
        assert!(rendered.contains("salaryRange"));
        assert!(rendered.contains("requiredSkills"));
        // Metadata stays out of the prompt.
        assert!(!rendered.contains("postedDate"));
    }
}
