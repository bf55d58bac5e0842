//! Fixed prompt contracts sent to the generative backend.
//!
//! Each prompt pins the exact JSON shape the caller will try to parse. The
//! digest prompt intentionally steers off-domain queries back toward the
//! platform's Web3 subject domain instead of refusing them.

/// Prompt for the topic digest. Demands one JSON object with twelve fields.
pub fn digest_prompt(query: &str, category: Option<&str>) -> String {
    let category_line = category
        .map(|c| format!("\nThe user filed this query under the category: \"{c}\".\n"))
        .unwrap_or_default();

    format!(
        r#"You are a Web3 research assistant. Please provide comprehensive, up-to-date information about: "{query}"
{category_line}
Please structure your response as a JSON object with the following format:
{{
  "title": "A clear, descriptive title",
  "summary": "A 2-3 sentence summary of the topic",
  "keyPoints": ["Point 1", "Point 2", "Point 3", "Point 4", "Point 5"],
  "currentTrends": "Current trends and developments in this area",
  "technicalDetails": "Technical aspects and implementation details",
  "useCases": ["Use case 1", "Use case 2", "Use case 3"],
  "challenges": "Current challenges and limitations",
  "futureOutlook": "Future developments and predictions",
  "resources": ["Resource 1", "Resource 2", "Resource 3"],
  "relatedTopics": ["Related topic 1", "Related topic 2", "Related topic 3"],
  "lastUpdated": "Current date",
  "confidence": "High/Medium/Low based on available information"
}}

Focus on:
- Web3, blockchain, DeFi, NFTs, and related technologies
- Current market trends and developments
- Practical applications and use cases
- Technical implementation details
- Recent news and updates
- Expert insights and analysis

Make sure the information is accurate, up-to-date, and relevant to the Web3 ecosystem. If the topic is not directly related to Web3, explain how it connects to or impacts the Web3 space.
"#
    )
}

/// Prompt for Move smart-contract validation.
pub fn audit_prompt(contract_code: &str) -> String {
    format!(
        r#"You are an expert Move language smart contract validator. Analyze this Move contract:

```move
{contract_code}
```

Provide analysis in this JSON format:
{{
  "overallStatus": "PASSED|WARNING|FAILED",
  "summary": "Brief summary",
  "lineCount": number,
  "issues": [
    {{
      "type": "ERROR|WARNING|INFO",
      "severity": "CRITICAL|HIGH|MEDIUM|LOW",
      "line": number,
      "title": "Issue title",
      "description": "Description",
      "suggestion": "How to fix"
    }}
  ],
  "securityChecks": [
    {{
      "check": "Check name",
      "status": "PASSED|FAILED|WARNING",
      "description": "Description"
    }}
  ],
  "bestPractices": [
    {{
      "practice": "Practice name",
      "status": "FOLLOWED|NOT_FOLLOWED",
      "description": "Description"
    }}
  ],
  "gasOptimization": {{
    "status": "OPTIMIZED|NEEDS_IMPROVEMENT",
    "suggestions": ["Suggestion 1", "Suggestion 2"]
  }},
  "recommendations": ["Recommendation 1", "Recommendation 2"]
}}

Check for: syntax errors, security vulnerabilities, best practices, gas optimization.
"#
    )
}

/// Prompt for consultant profile vetting.
pub fn vetting_prompt(profile_summary: &str) -> String {
    format!(
        r#"You are a Web3 consultant validation expert. Please analyze the following consultant application and provide validation results.

Consultant Details:
{profile_summary}

Please provide your analysis in the following JSON format:
{{
  "isApproved": boolean,
  "confidence": "HIGH|MEDIUM|LOW",
  "rating": number (1-5),
  "verificationStatus": "VERIFIED|PENDING|REJECTED",
  "expertiseLevel": "BEGINNER|INTERMEDIATE|EXPERT",
  "recommendations": ["Recommendation 1", "Recommendation 2"],
  "validationNotes": "Detailed validation notes",
  "suggestedSpecialties": ["Specialty 1", "Specialty 2"],
  "profileEnhancement": "Suggestions for profile improvement"
}}

Focus on:
1. Web3 expertise validation
2. Experience level assessment
3. Profile completeness
4. Professional credibility
5. Rate appropriateness
6. Specialization relevance

Be thorough in your analysis and provide specific feedback for improvement.
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_prompt_embeds_query() {
        let p = digest_prompt("restaking protocols", None);
        assert!(p.contains("\"restaking protocols\""));
        assert!(p.contains("\"relatedTopics\""));
        assert!(!p.contains("category"));
    }

    #[test]
    fn test_digest_prompt_embeds_category_when_present() {
        let p = digest_prompt("restaking", Some("Staking"));
        assert!(p.contains("category: \"Staking\""));
    }

    #[test]
    fn test_audit_prompt_embeds_code() {
        let p = audit_prompt("module 0x1::m {}");
        assert!(p.contains("module 0x1::m {}"));
        assert!(p.contains("\"overallStatus\""));
    }

    #[test]
    fn test_vetting_prompt_embeds_profile() {
        let p = vetting_prompt("- Name: Ada\n- Expertise: zk");
        assert!(p.contains("- Name: Ada"));
        assert!(p.contains("\"verificationStatus\""));
    }
}
