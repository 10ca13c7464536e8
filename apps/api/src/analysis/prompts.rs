// All LLM prompt constants for the analysis module. Each capability pairs a
// persona with a prompt template; the JSON-only fragment from
// llm_client::prompts is appended to the persona at call time.

/// Persona for gap analysis and market insights.
pub const MARKET_ANALYST_PERSONA: &str =
    "You are a career intelligence analyst specializing in Rwanda's digital economy. \
    Your guidance is actionable, specific, and connects directly to job outcomes \
    in Rwanda's market.";

/// Gap analysis prompt template. Replace `{skills}` and `{unqualified_jobs}`
/// before sending.
pub const GAP_ANALYSIS_PROMPT_TEMPLATE: &str = r#"A user has the following skills: {skills}.

They are NOT qualified for the following jobs:
{unqualified_jobs}

Analyze the user's skill gap and recommend the top 1-2 skills they should learn to unlock the most significant job opportunities. For each recommendation give a brief explanation and the estimated monthly salary increase in RWF.

Return a JSON object with this EXACT schema (no extra fields):
{
  "recommendations": [
    {
      "skill": "<skill name, lowercase>",
      "explanation": "<one or two sentences>",
      "salaryIncrease": <integer RWF>
    }
  ]
}

Recommend ONLY skills that appear in the required skills of the listed jobs and that the user does not already have."#;

/// Persona for curriculum generation.
pub const CURRICULUM_PERSONA: &str =
    "You are an expert curriculum designer creating job-market-driven learning \
    paths for Rwanda.";

/// Curriculum prompt template. Replace `{skills}` before sending.
pub const CURRICULUM_PROMPT_TEMPLATE: &str = r#"A user wants to learn the following skills: {skills}.

Design a practical, project-based learning experience for these skills. Use accessible, free or low-cost resources relevant to Rwanda. For each skill provide a link to a learning resource and a brief portfolio project description to test the knowledge.

Return a JSON object with this EXACT schema (no extra fields):
{
  "learningPath": [
    {
      "skill": "<skill name>",
      "resource": "<resource link>",
      "project": "<project description>"
    }
  ]
}"#;

/// Market insights prompt template. Replace `{skills}` and `{qualified_jobs}`.
pub const MARKET_INSIGHTS_PROMPT_TEMPLATE: &str = r#"A user has the following skills: {skills}.

They currently qualify for the following jobs:
{qualified_jobs}

Provide 3-5 concise, Rwanda-specific observations about the market for this profile: demand trends, salary movement, and which adjacent skills employers ask for.

Return a JSON object with this EXACT schema (no extra fields):
{
  "insights": [
    "<one observation per string>"
  ]
}"#;

/// Persona template for coach chat. Replace `{role}` with the caller-supplied
/// persona label before sending.
pub const COACH_CHAT_PERSONA_TEMPLATE: &str =
    "You are {role}, an encouraging career coach for Rwanda's digital economy. \
    Ground every answer in the user's career analysis.";

/// Coach chat prompt template. Replace `{analysis}` and `{question}`.
pub const COACH_CHAT_PROMPT_TEMPLATE: &str = r#"The user's current career analysis:
{analysis}

The user asks: {question}

Answer concretely in at most four sentences, referring to the analysis where relevant. Then suggest 2-3 short follow-up questions the user could ask next.

Return a JSON object with this EXACT schema (no extra fields):
{
  "answer": "<your answer>",
  "followUps": ["<short question>", "<short question>"]
}"#;

/// Persona for course generation.
pub const COURSE_PERSONA: &str =
    "You are an expert instructor designing short, practical tech courses for \
    learners in Rwanda who study while working.";

/// Course prompt template. Replace `{target_skill}`, `{level}`, `{skills}`.
pub const COURSE_PROMPT_TEMPLATE: &str = r#"Create a short course outline teaching {target_skill} to a {level} learner.

The learner already has these skills: {skills}. Build on them where possible and skip what they already know.

The course must be completable in a few weeks of part-time study, use free or low-cost resources, and end with a portfolio project.

Return a JSON object with this EXACT schema (no extra fields):
{
  "title": "<course title>",
  "duration": "<e.g. 2 weeks>",
  "modules": [
    {
      "title": "<module title>",
      "lessons": [
        {"title": "<lesson title>", "resource": "<resource link>"}
      ]
    }
  ],
  "project": {"title": "<project title>", "brief": "<what to build>"}
}"#;
