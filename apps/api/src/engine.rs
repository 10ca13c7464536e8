//! Skill-Gap Engine — pure qualification and salary arithmetic over the
//! catalog.
//!
//! Every function here is deterministic, side-effect free, and total: inputs
//! are treated as well-formed once past the handler boundary. Skill matching
//! is exact string equality after case-folding — a job requiring N skills
//! needs all N present, no partial credit.

use std::collections::HashSet;

use crate::catalog::JobRecord;

fn normalized(skills: &[String]) -> HashSet<String> {
    skills.iter().map(|s| s.to_lowercase()).collect()
}

fn is_qualified(skill_set: &HashSet<String>, job: &JobRecord) -> bool {
    job.required_skills
        .iter()
        .all(|req| skill_set.contains(&req.to_lowercase()))
}

/// Jobs whose every required skill is present in `skills`. Catalog order is
/// preserved.
pub fn qualified_jobs(skills: &[String], jobs: &[JobRecord]) -> Vec<JobRecord> {
    let skill_set = normalized(skills);
    jobs.iter()
        .filter(|job| is_qualified(&skill_set, job))
        .cloned()
        .collect()
}

/// Complement of [`qualified_jobs`].
pub fn unqualified_jobs(skills: &[String], jobs: &[JobRecord]) -> Vec<JobRecord> {
    let skill_set = normalized(skills);
    jobs.iter()
        .filter(|job| !is_qualified(&skill_set, job))
        .cloned()
        .collect()
}

/// Maximum upper salary bound across `jobs`, or 0 when empty.
pub fn max_salary(jobs: &[JobRecord]) -> u64 {
    jobs.iter().map(|job| job.salary_range.max).max().unwrap_or(0)
}

/// Potential salary increase from learning `new_skill`, clamped at zero.
pub fn salary_impact(skills: &[String], new_skill: &str, jobs: &[JobRecord]) -> u64 {
    let current_max = max_salary(&qualified_jobs(skills, jobs));

    let mut expanded: Vec<String> = skills.to_vec();
    expanded.push(new_skill.to_string());
    let new_max = max_salary(&qualified_jobs(&expanded, jobs));

    new_max.saturating_sub(current_max)
}

/// Jobs out of reach today that become reachable once `learned` skills are
/// acquired.
pub fn next_level_opportunities(
    skills: &[String],
    learned: &[String],
    jobs: &[JobRecord],
) -> Vec<JobRecord> {
    let current = normalized(skills);
    let mut expanded = current.clone();
    expanded.extend(learned.iter().map(|s| s.to_lowercase()));

    jobs.iter()
        .filter(|job| !is_qualified(&current, job) && is_qualified(&expanded, job))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{JobCatalog, SalaryRange};
    use std::collections::HashSet;

    fn make_job(id: u32, max_salary: u64, skills: &[&str]) -> JobRecord {
        JobRecord {
            id,
            title: format!("Job {id}"),
            salary_range: SalaryRange {
                min: max_salary / 2,
                max: max_salary,
                currency: "RWF".to_string(),
            },
            required_skills: skills.iter().map(|s| s.to_string()).collect(),
            company: None,
            location: None,
            industry: None,
            experience_level: None,
            posted_date: None,
        }
    }

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn ids(jobs: &[JobRecord]) -> Vec<u32> {
        jobs.iter().map(|j| j.id).collect()
    }

    #[test]
    fn test_qualified_and_unqualified_partition_the_catalog() {
        let catalog = JobCatalog::bundled();
        let user = skills(&["html", "css", "javascript", "python"]);

        let qualified = qualified_jobs(&user, catalog.jobs());
        let unqualified = unqualified_jobs(&user, catalog.jobs());

        assert_eq!(qualified.len() + unqualified.len(), catalog.jobs().len());

        let qualified_ids: HashSet<u32> = qualified.iter().map(|j| j.id).collect();
        let unqualified_ids: HashSet<u32> = unqualified.iter().map(|j| j.id).collect();
        assert!(qualified_ids.is_disjoint(&unqualified_ids));
    }

    #[test]
    fn test_exact_subset_match_qualifies() {
        // Catalog job 1 requires exactly html, css, javascript.
        let catalog = JobCatalog::bundled();
        let user = skills(&["html", "css", "javascript"]);

        let qualified = qualified_jobs(&user, catalog.jobs());
        assert!(ids(&qualified).contains(&1));

        let unqualified = unqualified_jobs(&user, catalog.jobs());
        assert!(!ids(&unqualified).contains(&1));
    }

    #[test]
    fn test_one_missing_skill_disqualifies() {
        let jobs = vec![make_job(1, 500_000, &["rust", "sql", "docker"])];
        let user = skills(&["rust", "sql"]);
        assert!(qualified_jobs(&user, &jobs).is_empty());
    }

    #[test]
    fn test_matching_is_case_folded_not_fuzzy() {
        let jobs = vec![make_job(1, 500_000, &["react"])];
        assert_eq!(qualified_jobs(&skills(&["React"]), &jobs).len(), 1);
        // Substrings and near-matches never count.
        assert!(qualified_jobs(&skills(&["reactjs"]), &jobs).is_empty());
    }

    #[test]
    fn test_catalog_order_is_preserved() {
        let jobs = vec![
            make_job(3, 100, &["a"]),
            make_job(1, 200, &["a"]),
            make_job(2, 300, &["a"]),
        ];
        assert_eq!(ids(&qualified_jobs(&skills(&["a"]), &jobs)), vec![3, 1, 2]);
    }

    #[test]
    fn test_engine_functions_are_idempotent() {
        let catalog = JobCatalog::bundled();
        let user = skills(&["python", "sql", "git"]);

        assert_eq!(
            qualified_jobs(&user, catalog.jobs()),
            qualified_jobs(&user, catalog.jobs())
        );
        assert_eq!(
            unqualified_jobs(&user, catalog.jobs()),
            unqualified_jobs(&user, catalog.jobs())
        );
    }

    #[test]
    fn test_max_salary_of_empty_set_is_zero() {
        assert_eq!(max_salary(&[]), 0);
    }

    #[test]
    fn test_max_salary_takes_upper_bound() {
        let jobs = vec![make_job(1, 300_000, &["a"]), make_job(2, 800_000, &["b"])];
        assert_eq!(max_salary(&jobs), 800_000);
    }

    #[test]
    fn test_salary_impact_clamps_at_zero() {
        // One job requiring five skills, upper bound 800k; python + fastapi
        // still leaves three missing, so the impact is zero.
        let jobs = vec![make_job(
            1,
            800_000,
            &["python", "fastapi", "sql", "docker", "git"],
        )];
        assert_eq!(salary_impact(&skills(&["python"]), "fastapi", &jobs), 0);
    }

    #[test]
    fn test_salary_impact_is_the_documented_difference() {
        let jobs = vec![
            make_job(1, 300_000, &["javascript"]),
            make_job(2, 600_000, &["javascript", "react"]),
        ];
        assert_eq!(salary_impact(&skills(&["javascript"]), "react", &jobs), 300_000);
    }

    #[test]
    fn test_salary_impact_never_negative_when_skill_adds_nothing() {
        let jobs = vec![make_job(1, 300_000, &["javascript"])];
        assert_eq!(salary_impact(&skills(&["javascript"]), "cobol", &jobs), 0);
    }

    #[test]
    fn test_next_level_disjoint_from_current_qualified() {
        let catalog = JobCatalog::bundled();
        let user = skills(&["html", "css", "javascript"]);
        let learned = skills(&["react", "git"]);

        let current: HashSet<u32> = qualified_jobs(&user, catalog.jobs())
            .iter()
            .map(|j| j.id)
            .collect();
        let next: HashSet<u32> = next_level_opportunities(&user, &learned, catalog.jobs())
            .iter()
            .map(|j| j.id)
            .collect();

        assert!(current.is_disjoint(&next));
        // react + git unlock the frontend role.
        assert!(next.contains(&2));
    }

    #[test]
    fn test_next_level_requires_learned_skills_to_complete_the_set() {
        let jobs = vec![make_job(1, 500_000, &["python", "sql", "docker"])];
        // docker alone is not enough — sql is still missing.
        let next = next_level_opportunities(&skills(&["python"]), &skills(&["docker"]), &jobs);
        assert!(next.is_empty());
    }

    #[test]
    fn test_next_level_empty_learned_set_yields_nothing() {
        let catalog = JobCatalog::bundled();
        let user = skills(&["html"]);
        assert!(next_level_opportunities(&user, &[], catalog.jobs()).is_empty());
    }
}
