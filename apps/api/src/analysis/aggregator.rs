//! Full Analysis — orchestrates the engine and the analyst into one report.
//!
//! Flow: qualified/unqualified split → gap analysis → learning path for the
//! recommended skills → market insights → next-level opportunities →
//! salary projection → assemble `FullAnalysis`.
//!
//! Any analyst failure is terminal for the whole operation: no retries, no
//! partial aggregate.

use tracing::info;

use crate::analysis::analyst::CareerAnalyst;
use crate::analysis::models::{Curriculum, FullAnalysis, SalaryProjection};
use crate::catalog::JobCatalog;
use crate::engine;
use crate::errors::AppError;

/// Runs the full-analysis pipeline for one skill set.
pub async fn generate_full_analysis(
    catalog: &JobCatalog,
    analyst: &dyn CareerAnalyst,
    skills: &[String],
) -> Result<FullAnalysis, AppError> {
    // Step 1: deterministic qualification split
    let qualified = engine::qualified_jobs(skills, catalog.jobs());
    let unqualified = engine::unqualified_jobs(skills, catalog.jobs());
    info!(
        "Skill set of {} qualifies for {}/{} catalog jobs",
        skills.len(),
        qualified.len(),
        catalog.jobs().len()
    );

    // Step 2: gap analysis over the jobs out of reach
    let gap = analyst.gap_analysis(skills, &unqualified).await?;
    let recommended: Vec<String> = gap
        .recommendations
        .iter()
        .map(|r| r.skill.to_lowercase())
        .collect();
    info!("Gap analysis recommends: {}", recommended.join(", "));

    // Step 3: learning path for the recommended skills
    let curriculum = if recommended.is_empty() {
        Curriculum {
            learning_path: vec![],
        }
    } else {
        analyst.learning_path(&recommended).await?
    };

    // Step 4: market insights for the current profile
    let insights = analyst.market_insights(skills, &qualified).await?;

    // Step 5: jobs that open up once the recommended skills are learned
    let next_level = engine::next_level_opportunities(skills, &recommended, catalog.jobs());

    // Step 6: salary projection — current max vs max with the gap skills added
    let current_max = engine::max_salary(&qualified);
    let mut expanded = skills.to_vec();
    expanded.extend(recommended.iter().cloned());
    let potential_max = engine::max_salary(&engine::qualified_jobs(&expanded, catalog.jobs()));

    Ok(FullAnalysis {
        qualified_jobs: qualified,
        market_insights: insights.insights,
        salary_projection: SalaryProjection {
            current: current_max,
            potential: potential_max,
        },
        skill_gaps: gap.recommendations,
        learning_path: curriculum.learning_path,
        next_level_jobs: next_level,
    })
}
