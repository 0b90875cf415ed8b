//! Skill keyword matching: literal, case-insensitive substring containment.
//!
//! No tokenization or word-boundary checks: "r" matches inside "terraform".
//! Role suggestions depend on this exact behaviour.

use crate::models::{Role, SkillMatches};

/// The keyword list scanned for each role.
pub fn role_keywords(role: Role) -> &'static [&'static str] {
    match role {
        Role::CloudEngineer => &[
            "aws", "azure", "gcp", "kubernetes", "docker", "terraform", "ansible", "jenkins",
            "ci/cd", "microservices", "serverless", "lambda", "ec2", "s3", "rds", "vpc",
            "cloudformation", "elasticsearch", "redis",
        ],
        Role::BackendEngineer => &[
            "python", "java", "node.js", "go", "c++", "c#", "spring", "django", "flask",
            "express", "postgresql", "mysql", "mongodb", "redis", "kafka", "rabbitmq",
            "rest api", "graphql", "microservices", "docker",
        ],
        Role::FrontendEngineer => &[
            "javascript", "typescript", "react", "vue", "angular", "html", "css", "sass",
            "webpack", "babel", "redux", "vuex", "next.js", "nuxt.js", "responsive design",
            "accessibility", "seo", "pwa",
        ],
        Role::UiUxDesigner => &[
            "figma", "sketch", "adobe xd", "invision", "prototyping", "wireframing",
            "user research", "usability testing", "design systems", "typography",
            "color theory", "interaction design", "information architecture",
        ],
        Role::Sde => &[
            "data structures", "algorithms", "leetcode", "system design",
            "distributed systems", "python", "java", "c++", "javascript", "sql", "nosql", "git",
            "agile", "scrum",
        ],
        Role::DataAnalyst => &[
            "sql", "python", "r", "excel", "tableau", "power bi", "pandas", "numpy",
            "matplotlib", "seaborn", "statistics", "machine learning", "data visualization",
            "etl", "data warehousing", "business intelligence",
        ],
        Role::AiEngineer => &[
            "python", "tensorflow", "pytorch", "scikit-learn", "keras", "numpy", "pandas",
            "machine learning", "deep learning", "neural networks", "nlp", "computer vision",
            "reinforcement learning", "mlops", "model deployment", "data preprocessing",
        ],
    }
}

/// Matched keywords for every role. Every role has an entry, possibly empty;
/// keywords keep their declaration order.
pub fn extract_skills(text: &str) -> SkillMatches {
    let text_lower = text.to_lowercase();
    Role::ALL
        .into_iter()
        .map(|role| {
            let found = role_keywords(role)
                .iter()
                .filter(|kw| text_lower.contains(*kw))
                .map(|kw| kw.to_string())
                .collect();
            (role, found)
        })
        .collect()
}
