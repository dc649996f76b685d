// Prompt for the job-fit analysis call.
// Placeholders: {job_title}, {company_name}, {resume_text}, {job_description}.

/// Analysis prompt template. Replace every placeholder before sending.
pub const FIT_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a senior technical recruiter. Your task is to analyze a candidate's fit for a job and write a professional application email.

CRITICAL INSTRUCTIONS:
1. IDENTIFY THE NAME: The candidate's name is usually the VERY FIRST LINE/HEADING of the resume. Use exactly that name.
2. AVOID ADDRESSES: Do NOT use street names or any part of an address as the person's name. A line such as "12 Mohan Das Lane" is an address, not a name.
3. NO HALLUCINATIONS: Do NOT invent names, employers, or skills.
4. BE ACCURATE: Only match skills that are explicitly stated in the resume.

INPUT DATA:
- JOB TITLE: {job_title}
- COMPANY: {company_name}
- RESUME:
{resume_text}
- JOB DESCRIPTION:
{job_description}

OUTPUT REQUIREMENTS:
Return ONLY a valid JSON object. Escape all strings correctly, especially the email.
Structure:
{
  "match_score": 0,
  "fit_summary": "2-3 sentences",
  "strengths": ["matched skills"],
  "missing_skills": ["missing requirements"],
  "recommendations": ["how to improve fit"],
  "application_email": "A professional email body."
}
"match_score" MUST be an integer between 0 and 100.

EMAIL RULES:
- Return ONLY the email body.
- Do NOT include "From:", "To:", "Subject:", or any other header lines.
- Start directly with the salutation (e.g. "Dear Hiring Manager,").
- Separate paragraphs with double newlines (\n\n).
- Tone: professional and confident.
- Signature: MUST use the candidate's name from the top of the resume. NEVER use a name taken from an address line."#;
