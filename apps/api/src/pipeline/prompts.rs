// All completion prompt templates for the pipeline module.
//
// Each template embeds its inputs verbatim — content selection and formatting
// are the remote model's job, never done locally.

/// Job-fit analysis prompt template.
/// Replace: `{resume_json}`, `{job_description}`.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"As an expert resume analyst, create a comprehensive optimization strategy for the given JSON resume data to match the job description. Your task:

1. Parse the JSON resume thoroughly, extracting all key sections: work experience, skills, education, and projects.
2. Map resume sections directly to job description requirements.
3. Identify exact skill and experience matches.
4. Determine the most relevant professional experiences.
5. Create a targeted alignment strategy.
6. Suggest relevant keywords from the job description to be added where appropriate.
7. Propose a new arrangement of sections (especially projects and skills) to better match the job description.

Important: Do not remove any information from the original JSON data. Instead, focus on rearranging and enhancing the content.

Resume Data:
{resume_json}

Job Description:
{job_description}

Provide a structured, data-driven optimization strategy, including:
1. Skill overlap percentage
2. Recommended content modifications
3. Suggested keyword additions
4. Proposed section rearrangement
5. A 3-line summary (tailored to the role): this is the candidate's elevator pitch. Highlight their biggest achievements and skills that prove they're the right fit for the role. Make it sound natural, as if the candidate wrote it themselves. Be formal but conversational. Don't mention specific company names.

For the summary, focus on making it sound authentic, human, and tailored to the specific role. Use the candidate's voice and perspective.

Additionally, suggest how to consolidate skills sections if there are multiple, aiming for about 5 main categories under skills. Don't combine all sections, but identify opportunities to group related skills effectively.

Emphasize the importance of keywords throughout the optimization strategy."#;

/// Resume rewrite prompt template.
/// Replace: `{job_fit_analysis}`, `{original_template}`, `{resume_json}`,
/// `{job_description}`.
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"As an expert resume writer with 15 years of experience, optimize the given LaTeX resume based on the job analysis and JSON data. Your task:

1. Generate a complete, ready-to-use LaTeX code for the optimized resume.
2. Use the existing LaTeX template as a base, but modify it according to the optimization strategy.
3. Incorporate all data from the JSON, rearranging sections as suggested in the job analysis.
4. Add relevant keywords from the job description where appropriate, ensuring high keyword density.
5. Include the 3-line summary at the top of the resume, formatted appropriately in LaTeX.
6. Ensure no information from the original JSON is omitted.
7. Consolidate skills sections as suggested in the job analysis, aiming for about 5 main categories.

Follow these specific rules:
- Preserve the overall style and formatting of the original template.
- Reorder sections based on job relevance.
- Use exact phrases from the JSON data where possible.
- Maximize keyword matching with the job description.
- Optimize section weights according to the job analysis.
- Ensure the skills section is well-organized and keyword-rich.
- Rearrange the projects and skills sections to better match the job description and if needed try to remove at most 1 irrelevant project.

Job Fit Analysis: {job_fit_analysis}
Original LaTeX Template: {original_template}
JSON Resume Data: {resume_json}
Job Description: {job_description}

Provide the complete, optimized LaTeX code ready for compilation, only the code, no comments or explanations."#;

/// Cover letter prompt template.
/// Replace: `{resume_json}`, `{job_description}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"As an expert career writer, write a complete, ready-to-compile LaTeX cover letter for the candidate below, tailored to the job description. Your task:

1. Use this LaTeX skeleton exactly as the document structure, filling in the bracketed parts:

\documentclass[11pt]{letter}
\usepackage[margin=1in]{geometry}
\signature{[candidate name from the resume data]}
\begin{document}
\begin{letter}{[company name and role from the job description]}
\opening{Dear Hiring Manager,}
[four body paragraphs]
\closing{Sincerely,}
\end{letter}
\end{document}

2. Write exactly four body paragraphs:
   - Paragraph 1: an opening hook naming the specific role and why the candidate is applying.
   - Paragraph 2: the candidate's strongest evidence for the role, drawn from the resume data.
   - Paragraph 3: alignment with the company's work and priorities as stated in the job description.
   - Paragraph 4: a brief closing with a call to action.
3. Keep the body under 350 words.
4. Include at least two quantified achievements taken from the resume data.
5. Include at least two references to the specific company or team from the job description.
6. Do not invent facts that are not present in the resume data.

Resume Data:
{resume_json}

Job Description:
{job_description}

Provide only the complete LaTeX code, no comments or explanations."#;

/// Evaluation prompt template.
/// Replace: `{original_template}`, `{optimized_resume}`, `{job_description}`.
pub const EVALUATE_PROMPT_TEMPLATE: &str = r#"Provide a concise, data-driven comparison of the original and optimized resumes.
Focus on key improvements and use a structured format. Compare:
1. Keyword match percentage
2. Section relevance
3. Achievement descriptions
4. Professional positioning
5. Job description alignment

Provide a brief, quantitative assessment with clear, measurable improvements.
Highlight top 3 key enhancements and any potential areas for further refinement.

Original Resume: {original_template}
Optimized Resume: {optimized_resume}
Job Description: {job_description}"#;
