//! Template Catalog: the fixed interview archetypes used to seed new interviews.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::interview::{InterviewType, Level, NewInterview};

/// An interview archetype. Never persisted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTemplate {
    pub role: &'static str,
    pub level: Level,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub techstack: &'static [&'static str],
    /// Minutes.
    pub duration: u32,
    pub description: &'static str,
    pub job_description: &'static str,
}

impl InterviewTemplate {
    /// An unfinalized, question-less interview for `user_id` built from this template.
    pub fn instantiate(
        &self,
        user_id: &str,
        cover_image: String,
        created_at: DateTime<Utc>,
    ) -> NewInterview {
        NewInterview {
            role: self.role.to_string(),
            level: self.level.as_str().to_string(),
            interview_type: self.interview_type.as_str().to_string(),
            techstack: self.techstack.iter().map(|t| t.to_string()).collect(),
            duration: Some(self.duration),
            description: Some(self.description.to_string()),
            job_description: Some(self.job_description.to_string()),
            user_id: user_id.to_string(),
            cover_image,
            created_at: Some(created_at),
            finalized: false,
            questions: Vec::new(),
            generated_by: None,
        }
    }
}

pub static TEMPLATES: [InterviewTemplate; 12] = [
    InterviewTemplate {
        role: "Frontend Developer",
        level: Level::Entry,
        interview_type: InterviewType::Technical,
        techstack: &["HTML", "CSS", "JavaScript", "React", "Responsive Design"],
        duration: 30,
        description: "Technical interview focusing on HTML, CSS, JavaScript fundamentals, React basics, and \
            basic web development concepts.",
        job_description: "We're looking for an entry-level frontend developer to join our team. You'll work on \
            building responsive web applications using modern frameworks.",
    },
    InterviewTemplate {
        role: "Backend Developer",
        level: Level::Mid,
        interview_type: InterviewType::Mixed,
        techstack: &[
            "Node.js",
            "Python",
            "PostgreSQL",
            "REST APIs",
            "Docker",
            "Team Collaboration",
        ],
        duration: 45,
        description: "Comprehensive interview covering Node.js/Python backend development, database design, \
            API development, plus teamwork and project management skills.",
        job_description: "We need an experienced backend developer to design and implement scalable APIs and \
            microservices. You'll work with our product and DevOps teams.",
    },
    InterviewTemplate {
        role: "Full Stack Developer",
        level: Level::Senior,
        interview_type: InterviewType::Technical,
        techstack: &[
            "React/Vue",
            "Node.js/Python",
            "System Design",
            "AWS/Azure",
            "Microservices",
            "Leadership",
        ],
        duration: 60,
        description: "In-depth technical interview covering frontend frameworks, backend architecture, \
            database optimization, system design, and cloud services.",
        job_description: "Senior full stack role requiring expertise in both frontend and backend. You'll lead \
            technical decisions and mentor junior developers.",
    },
    InterviewTemplate {
        role: "DevOps Engineer",
        level: Level::Mid,
        interview_type: InterviewType::Technical,
        techstack: &[
            "Kubernetes",
            "Docker",
            "Terraform",
            "AWS/GCP",
            "Jenkins/GitHub Actions",
            "Monitoring",
        ],
        duration: 45,
        description: "Technical assessment of CI/CD pipelines, containerization, orchestration, infrastructure \
            as code, and monitoring solutions.",
        job_description: "Looking for a DevOps engineer to manage our cloud infrastructure, implement CI/CD \
            pipelines, and improve deployment processes.",
    },
    InterviewTemplate {
        role: "Mobile Developer",
        level: Level::Entry,
        interview_type: InterviewType::Technical,
        techstack: &["React Native", "Flutter", "Mobile UI/UX", "REST APIs", "Git"],
        duration: 30,
        description: "Technical interview on mobile app development fundamentals using React Native or \
            Flutter, mobile UI/UX patterns, and API integration.",
        job_description: "Entry-level mobile developer needed to build cross-platform mobile applications. \
            Experience with React Native or Flutter preferred.",
    },
    InterviewTemplate {
        role: "Data Engineer",
        level: Level::Senior,
        interview_type: InterviewType::Technical,
        techstack: &[
            "Apache Spark",
            "Airflow",
            "SQL/NoSQL",
            "Data Warehousing",
            "Python",
            "Cloud Data Services",
        ],
        duration: 60,
        description: "Advanced technical interview covering data pipelines, ETL processes, big data \
            technologies, data warehousing, and optimization techniques.",
        job_description: "Senior data engineer to design and maintain our data infrastructure. Experience with big \
            data processing and data warehouse solutions required.",
    },
    InterviewTemplate {
        role: "UI/UX Designer",
        level: Level::Mid,
        interview_type: InterviewType::Mixed,
        techstack: &[
            "Figma",
            "User Research",
            "Prototyping",
            "Design Systems",
            "Communication",
            "Collaboration",
        ],
        duration: 45,
        description: "Interview assessing design tools proficiency, user research methods, prototyping skills, \
            alongside communication and collaboration abilities.",
        job_description: "Mid-level UI/UX designer to create intuitive user interfaces and conduct user research. \
            You'll work closely with product and engineering teams.",
    },
    InterviewTemplate {
        role: "Software Engineer",
        level: Level::Entry,
        interview_type: InterviewType::Behavioral,
        techstack: &[
            "Communication",
            "Teamwork",
            "Problem Solving",
            "Adaptability",
            "Learning Mindset",
        ],
        duration: 30,
        description: "Behavioral interview focusing on teamwork, problem-solving approach, learning ability, \
            adaptability, and cultural fit.",
        job_description: "Entry-level software engineer position. We value eagerness to learn, good communication \
            skills, and ability to work in a team environment.",
    },
    InterviewTemplate {
        role: "Senior Software Engineer",
        level: Level::Senior,
        interview_type: InterviewType::Behavioral,
        techstack: &[
            "Leadership",
            "Mentorship",
            "Technical Strategy",
            "Conflict Resolution",
            "Cross-team Collaboration",
            "Decision Making",
        ],
        duration: 45,
        description: "Leadership-focused behavioral interview covering mentorship experience, conflict \
            resolution, technical decision-making, and team influence.",
        job_description: "Senior engineer who will mentor team members, drive technical initiatives, and \
            contribute to engineering culture and best practices.",
    },
    InterviewTemplate {
        role: "Cloud Architect",
        level: Level::Senior,
        interview_type: InterviewType::Technical,
        techstack: &[
            "AWS/Azure/GCP",
            "Cloud Architecture",
            "Security",
            "Cost Optimization",
            "Kubernetes",
            "Infrastructure as Code",
        ],
        duration: 60,
        description: "Technical interview on cloud architecture design, security best practices, cost \
            optimization, scalability patterns, and multi-cloud strategies.",
        job_description: "Senior cloud architect to design secure, scalable cloud solutions. Deep expertise in \
            AWS/Azure/GCP and cloud-native technologies required.",
    },
    InterviewTemplate {
        role: "QA Engineer",
        level: Level::Mid,
        interview_type: InterviewType::Mixed,
        techstack: &[
            "Test Automation",
            "Selenium/Cypress",
            "API Testing",
            "CI/CD Integration",
            "Communication",
            "Attention to Detail",
        ],
        duration: 45,
        description: "Interview covering test automation, testing frameworks, quality processes, plus \
            communication with development teams and attention to detail.",
        job_description: "Mid-level QA engineer to develop test automation frameworks and ensure product quality. \
            You'll collaborate with developers throughout the SDLC.",
    },
    InterviewTemplate {
        role: "Product Manager",
        level: Level::Mid,
        interview_type: InterviewType::Behavioral,
        techstack: &[
            "Stakeholder Management",
            "Prioritization",
            "User Research",
            "Data Analysis",
            "Communication",
            "Leadership",
        ],
        duration: 45,
        description: "Behavioral interview assessing stakeholder management, prioritization skills, user \
            empathy, data-driven decision making, and cross-functional leadership.",
        job_description: "Mid-level product manager to own product features from conception to launch. Strong \
            communication and stakeholder management skills essential.",
    },
];

/// The catalog in presentation order.
pub fn templates() -> &'static [InterviewTemplate] {
    &TEMPLATES
}
