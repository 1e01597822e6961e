//! Sample portfolio used to seed an empty store.
//!
//! Nothing in the library falls back to this data; callers opt in
//! explicitly (`portfolio_tui --seed-sample`).

use crate::catalog::{Catalog, Project, ProjectId};
use crate::error::{CatalogError, SkillError};
use crate::skills::{SkillGroup, SkillStat};

pub struct SampleProject {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub thumbnail: &'static str,
    pub role: &'static str,
    pub problem: &'static str,
    pub solution: &'static str,
    pub tools: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub results: &'static [&'static str],
    pub demo_link: Option<&'static str>,
    pub github_link: Option<&'static str>,
    pub images: &'static [&'static str],
}

pub const SAMPLE_PROJECTS: &[SampleProject] = &[
    SampleProject {
        id: "1",
        title: "VR Fitness Application",
        description: "An immersive virtual reality fitness application that combines gaming elements with workout routines.",
        thumbnail: "https://images.unsplash.com/photo-1593508512255-86ab42a8e620?w=800&q=80",
        role: "Lead Developer",
        problem: "Traditional workout routines can be monotonous and lead to decreased motivation over time. Users need engaging fitness experiences that keep them motivated and consistent.",
        solution: "Created an immersive VR environment where users can participate in gamified workout routines, compete with friends, and track their fitness progress in real-time.",
        tools: &["Unity3D", "C#", "Oculus SDK", "Firebase", "Blender"],
        challenges: &[
            "Optimizing performance for smooth VR experience",
            "Creating accurate fitness tracking algorithms",
            "Designing intuitive VR user interfaces",
            "Ensuring workout routines were both effective and safe",
        ],
        results: &[
            "10,000+ downloads in first month",
            "4.8/5 average user rating",
            "85% user retention after 30 days",
            "Featured in Oculus Store",
        ],
        demo_link: Some("https://example.com/demo"),
        github_link: Some("https://github.com/example/vr-fitness"),
        images: &[
            "https://images.unsplash.com/photo-1622979135225-d2ba269cf1ac?w=800&q=80",
            "https://images.unsplash.com/photo-1626379953822-baec19c3accd?w=800&q=80",
            "https://images.unsplash.com/photo-1478416272538-5f7e51dc5400?w=800&q=80",
        ],
    },
    SampleProject {
        id: "2",
        title: "AI-Powered Content Generator",
        description: "A machine learning tool that generates high-quality written content for marketing teams and content creators.",
        thumbnail: "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800&q=80",
        role: "ML Engineer & Frontend Developer",
        problem: "Content creation is time-consuming and resource-intensive. Marketing teams struggle to produce consistent, high-quality content at scale.",
        solution: "Developed an AI system trained on industry-specific data that can generate contextually relevant content while maintaining brand voice and style guidelines.",
        tools: &["Python", "TensorFlow", "React", "Node.js", "AWS"],
        challenges: &[
            "Training models to maintain consistent brand voice",
            "Ensuring factual accuracy in generated content",
            "Creating intuitive editing interface for non-technical users",
            "Optimizing generation speed for real-time use",
        ],
        results: &[
            "Reduced content creation time by 65%",
            "Increased content output by 3x",
            "93% of generated content approved with minimal edits",
            "Integrated with 5 major CMS platforms",
        ],
        demo_link: Some("https://example.com/ai-content-demo"),
        github_link: Some("https://github.com/example/ai-content-gen"),
        images: &[
            "https://images.unsplash.com/photo-1655720828018-edd2daec9349?w=800&q=80",
            "https://images.unsplash.com/photo-1675557009875-436f71457475?w=800&q=80",
        ],
    },
    SampleProject {
        id: "3",
        title: "Blockchain Supply Chain Tracker",
        description: "A decentralized application for tracking products through complex supply chains with immutable verification.",
        thumbnail: "https://images.unsplash.com/photo-1561414927-6d86591d0c4f?w=800&q=80",
        role: "Blockchain Developer",
        problem: "Supply chains lack transparency and traceability, leading to inefficiencies, fraud, and difficulty verifying ethical sourcing claims.",
        solution: "Built a blockchain-based system that creates an immutable record of each product's journey through the supply chain, with QR code integration for consumer verification.",
        tools: &["Solidity", "Ethereum", "React", "Node.js", "IPFS"],
        challenges: &[
            "Optimizing gas costs for enterprise-scale operations",
            "Creating user-friendly interfaces for non-crypto users",
            "Integrating with existing supply chain management systems",
            "Ensuring data privacy while maintaining transparency",
        ],
        results: &[
            "Reduced verification time from days to seconds",
            "Implemented in 3 global supply chains",
            "98% reduction in fraudulent product claims",
            "Featured in industry publications as innovative solution",
        ],
        demo_link: Some("https://example.com/blockchain-demo"),
        github_link: Some("https://github.com/example/supply-chain-dapp"),
        images: &[
            "https://images.unsplash.com/photo-1639762681057-408e52192e55?w=800&q=80",
            "https://images.unsplash.com/photo-1642104704074-907c0698cbd9?w=800&q=80",
        ],
    },
];

/// `(group title, [(skill, proficiency)])`.
pub const SAMPLE_SKILL_GROUPS: &[(&str, &[(&str, i64)])] = &[
    (
        "Development Skills",
        &[
            ("Unity3D", 95),
            ("Unreal Engine", 85),
            ("WebXR", 80),
            ("React", 80),
            ("Three.js", 85),
            ("UX Design", 75),
        ],
    ),
    (
        "Tooling",
        &[
            ("C#", 90),
            ("Python", 80),
            ("Node.js", 75),
            ("Blender", 70),
            ("Solidity", 65),
            ("Oculus SDK", 90),
        ],
    ),
];

impl SampleProject {
    pub fn to_project(&self) -> Project {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(ToString::to_string).collect()
        }

        Project {
            id: ProjectId::new(self.id),
            title: self.title.to_string(),
            description: self.description.to_string(),
            thumbnail: self.thumbnail.to_string(),
            role: self.role.to_string(),
            problem: self.problem.to_string(),
            solution: self.solution.to_string(),
            tools: owned(self.tools),
            challenges: owned(self.challenges),
            results: owned(self.results),
            demo_link: self.demo_link.map(ToString::to_string),
            github_link: self.github_link.map(ToString::to_string),
            images: owned(self.images),
        }
    }
}

pub fn sample_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(SAMPLE_PROJECTS.iter().map(SampleProject::to_project).collect())
}

/// Sample groups without project ids; enrich them against a catalog.
pub fn sample_skill_groups() -> Result<Vec<SkillGroup>, SkillError> {
    SAMPLE_SKILL_GROUPS
        .iter()
        .map(|(title, skills)| -> Result<SkillGroup, SkillError> {
            Ok(SkillGroup {
                title: (*title).to_string(),
                skills: skills
                    .iter()
                    .map(|(name, value)| SkillStat::new(*name, *value))
                    .collect::<Result<_, _>>()?,
            })
        })
        .collect()
}
