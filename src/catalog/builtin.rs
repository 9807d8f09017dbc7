//! Hand-authored default catalog

use crate::catalog::{CareerActions, Course, Difficulty, Vocabulary};
use crate::model::career::{CareerPath, ExperienceLevel, GrowthOutlook, RequiredSkills, SalaryBands};
use std::collections::BTreeMap;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn career(
    id: &str,
    title: &str,
    description: &str,
    industry: &str,
    salary: (u32, u32, u32),
    technical: &[&str],
    soft: &[&str],
    education: &[&str],
    experience_level: ExperienceLevel,
    growth_outlook: GrowthOutlook,
    work_environment: &[&str],
    emerging_role: bool,
    future_skills: &[&str],
) -> CareerPath {
    CareerPath {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        industry: industry.to_string(),
        average_salary: SalaryBands {
            entry: f64::from(salary.0),
            mid: f64::from(salary.1),
            senior: f64::from(salary.2),
        },
        required_skills: RequiredSkills {
            technical: strings(technical),
            soft: strings(soft),
        },
        education_requirements: strings(education),
        experience_level,
        growth_outlook,
        work_environment: strings(work_environment),
        emerging_role,
        future_skills: strings(future_skills),
    }
}

/// Catalog order is significant: ties in match score keep this order.
pub fn careers() -> Vec<CareerPath> {
    vec![
        career(
            "ai-engineer",
            "AI/ML Engineer",
            "Design, develop, and deploy artificial intelligence and machine learning systems to solve complex business problems.",
            "Technology",
            (95_000, 140_000, 200_000),
            &["Python", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch", "Data Science", "Statistics", "SQL"],
            &["Problem Solving", "Analytical Thinking", "Communication", "Collaboration"],
            &["Bachelor in Computer Science, Mathematics, or related field", "Strong foundation in statistics"],
            ExperienceLevel::Mid,
            GrowthOutlook::HighGrowth,
            &["Remote-friendly", "Collaborative", "Research-oriented"],
            true,
            &["Generative AI", "MLOps", "Edge AI", "Quantum Computing"],
        ),
        career(
            "full-stack-developer",
            "Full Stack Developer",
            "Build complete web applications handling both frontend user interfaces and backend server logic.",
            "Technology",
            (75_000, 110_000, 160_000),
            &["JavaScript", "React", "Node.js", "HTML", "CSS", "Databases", "Git", "APIs"],
            &["Problem Solving", "Attention to Detail", "Time Management", "Learning Agility"],
            &["Bachelor in Computer Science or equivalent experience", "Coding bootcamp acceptable"],
            ExperienceLevel::Entry,
            GrowthOutlook::Growing,
            &["Remote-friendly", "Fast-paced", "Collaborative"],
            false,
            &["WebAssembly", "Serverless Architecture", "GraphQL", "Micro-frontends"],
        ),
        career(
            "data-scientist",
            "Data Scientist",
            "Extract insights from complex datasets to drive business decisions using statistical analysis and machine learning.",
            "Technology",
            (90_000, 130_000, 180_000),
            &["Python", "R", "SQL", "Statistics", "Machine Learning", "Data Visualization", "Excel", "Tableau"],
            &["Critical Thinking", "Communication", "Business Acumen", "Curiosity"],
            &["Bachelor in Statistics, Mathematics, Computer Science, or related field", "Strong analytical background"],
            ExperienceLevel::Mid,
            GrowthOutlook::Growing,
            &["Analytical", "Cross-functional", "Data-driven"],
            false,
            &["AutoML", "Real-time Analytics", "Federated Learning", "Data Ethics"],
        ),
        career(
            "ux-designer",
            "UX Designer",
            "Research user needs and design intuitive, user-centered digital experiences and interfaces.",
            "Design",
            (65_000, 95_000, 140_000),
            &["Figma", "Adobe Creative Suite", "Prototyping", "User Research", "Wireframing", "HTML/CSS", "Design Systems"],
            &["Empathy", "Communication", "Creative Thinking", "Collaboration", "Problem Solving"],
            &["Bachelor in Design, HCI, Psychology, or related field", "Strong portfolio required"],
            ExperienceLevel::Entry,
            GrowthOutlook::Growing,
            &["Collaborative", "Creative", "User-focused"],
            false,
            &["Voice UI Design", "AR/VR Design", "AI-assisted Design", "Inclusive Design"],
        ),
        career(
            "cybersecurity-analyst",
            "Cybersecurity Analyst",
            "Protect organizations from cyber threats by monitoring, detecting, and responding to security incidents.",
            "Security",
            (70_000, 105_000, 150_000),
            &["Network Security", "SIEM Tools", "Incident Response", "Risk Assessment", "Compliance", "Linux", "Python"],
            &["Attention to Detail", "Critical Thinking", "Communication", "Stress Management"],
            &["Bachelor in Cybersecurity, Computer Science, or related field", "Security certifications preferred"],
            ExperienceLevel::Entry,
            GrowthOutlook::HighGrowth,
            &["Security-focused", "High-pressure", "Continuous Learning"],
            false,
            &["AI Security", "Cloud Security", "Zero Trust Architecture", "Threat Intelligence"],
        ),
        career(
            "product-manager",
            "Product Manager",
            "Drive product strategy and development by bridging business needs, user requirements, and technical capabilities.",
            "Technology",
            (80_000, 125_000, 180_000),
            &["Product Analytics", "A/B Testing", "SQL", "Project Management Tools", "Basic Technical Understanding"],
            &["Strategic Thinking", "Communication", "Leadership", "Negotiation", "Decision Making"],
            &["Bachelor in Business, Engineering, or related field", "MBA preferred for senior roles"],
            ExperienceLevel::Mid,
            GrowthOutlook::Growing,
            &["Cross-functional", "Strategic", "Customer-focused"],
            false,
            &["AI Product Management", "Data-driven Decision Making", "Growth Product Management", "Platform Strategy"],
        ),
        career(
            "digital-marketing-specialist",
            "Digital Marketing Specialist",
            "Create and execute online marketing campaigns to drive brand awareness, engagement, and conversions.",
            "Marketing",
            (45_000, 70_000, 100_000),
            &["Google Analytics", "Social Media Management", "SEO/SEM", "Email Marketing", "Content Management Systems", "Adobe Creative Suite"],
            &["Creativity", "Communication", "Analytical Thinking", "Adaptability"],
            &["Bachelor in Marketing, Communications, or related field", "Digital marketing certifications"],
            ExperienceLevel::Entry,
            GrowthOutlook::Growing,
            &["Creative", "Fast-paced", "Data-driven"],
            false,
            &["AI-powered Marketing", "Influencer Marketing", "Privacy-first Marketing", "Video Marketing"],
        ),
        career(
            "sustainability-consultant",
            "Sustainability Consultant",
            "Help organizations implement environmentally responsible practices and achieve sustainability goals.",
            "Consulting",
            (55_000, 85_000, 130_000),
            &["Life Cycle Assessment", "Environmental Regulations", "Data Analysis", "Sustainability Reporting", "Project Management"],
            &["Problem Solving", "Communication", "Systems Thinking", "Influence", "Passion for Environment"],
            &["Bachelor in Environmental Science, Business, or related field", "Sustainability certifications preferred"],
            ExperienceLevel::Entry,
            GrowthOutlook::HighGrowth,
            &["Purpose-driven", "Consulting", "Travel required"],
            true,
            &["Carbon Accounting", "ESG Reporting", "Circular Economy", "Climate Risk Assessment"],
        ),
    ]
}

fn course(title: &str, provider: &str, duration: &str, difficulty: Difficulty, skills: &[&str]) -> Course {
    Course {
        title: title.to_string(),
        provider: provider.to_string(),
        duration: duration.to_string(),
        difficulty,
        skills: strings(skills),
        url: None,
    }
}

pub fn courses() -> Vec<Course> {
    vec![
        course("Machine Learning Specialization", "Coursera", "3 months", Difficulty::Intermediate, &["Machine Learning", "Python", "TensorFlow"]),
        course("Complete React Developer Course", "Udemy", "6 weeks", Difficulty::Beginner, &["React", "JavaScript", "HTML", "CSS"]),
        course("Python for Data Science", "edX", "4 weeks", Difficulty::Beginner, &["Python", "Data Science", "Statistics"]),
        course("AWS Certified Solutions Architect", "AWS", "8 weeks", Difficulty::Intermediate, &["AWS", "Cloud Computing", "DevOps"]),
        course("Google UX Design Certificate", "Coursera", "6 months", Difficulty::Beginner, &["UX Design", "Figma", "User Research"]),
        course("Cybersecurity Fundamentals", "Cybrary", "4 weeks", Difficulty::Beginner, &["Network Security", "Incident Response", "Risk Assessment"]),
        course("Digital Marketing Mastery", "Udemy", "5 weeks", Difficulty::Intermediate, &["SEO", "Social Media Management", "Google Analytics"]),
    ]
}

fn actions(certifications: &[&str], projects: &[&str], networking: &[&str]) -> CareerActions {
    CareerActions {
        certifications: strings(certifications),
        projects: strings(projects),
        networking: strings(networking),
    }
}

pub fn action_tables() -> BTreeMap<String, CareerActions> {
    let entries = [
        (
            "ai-engineer",
            actions(
                &["TensorFlow Developer Certificate", "AWS Machine Learning Specialty"],
                &["Build a machine learning model for real-world problem", "Contribute to open-source ML project"],
                &["Join local AI/ML meetups", "Attend tech conferences like NeurIPS"],
            ),
        ),
        (
            "full-stack-developer",
            actions(
                &["AWS Developer Associate", "Google Cloud Professional Developer"],
                &["Create a full-stack web application", "Build and deploy a REST API"],
                &["Participate in hackathons", "Join developer communities on Discord"],
            ),
        ),
        (
            "data-scientist",
            actions(
                &["Google Data Analytics Certificate", "Microsoft Azure Data Scientist"],
                &["Complete end-to-end data analysis project", "Participate in Kaggle competition"],
                &["Attend data science conferences", "Join Kaggle community"],
            ),
        ),
        (
            "ux-designer",
            actions(
                &["Google UX Design Certificate", "Adobe Certified Expert"],
                &["Design a mobile app prototype", "Conduct user research study"],
                &["Join UX design communities", "Attend design conferences"],
            ),
        ),
        (
            "cybersecurity-analyst",
            actions(
                &["CompTIA Security+", "CISSP"],
                &["Set up home lab for security testing", "Complete vulnerability assessment"],
                &["Join cybersecurity forums", "Attend BSides conferences"],
            ),
        ),
        (
            "product-manager",
            actions(
                &["Google Product Management Certificate", "Certified Scrum Product Owner"],
                &["Launch a side project", "Create detailed product requirements document"],
                &["Join Product Manager communities", "Attend product conferences"],
            ),
        ),
        (
            "digital-marketing-specialist",
            actions(
                &["Google Ads Certification", "HubSpot Content Marketing"],
                &["Run social media campaign", "Optimize website for SEO"],
                &["Join marketing associations", "Attend digital marketing events"],
            ),
        ),
        (
            "sustainability-consultant",
            actions(
                &["LEED Green Associate", "GRI Sustainability Reporting"],
                &["Conduct sustainability audit", "Create ESG report for local business"],
                &["Join sustainability networks", "Attend environmental conferences"],
            ),
        ),
    ];

    entries
        .into_iter()
        .map(|(id, actions)| (id.to_string(), actions))
        .collect()
}

/// Suggested values offered by the assessment form.
pub fn vocabulary() -> Vocabulary {
    Vocabulary {
        technical_skills: strings(&[
            "Python", "JavaScript", "React", "Node.js", "SQL", "Machine Learning", "Data Science",
            "HTML", "CSS", "Git", "AWS", "Docker", "Kubernetes", "TensorFlow", "PyTorch",
            "Java", "C++", "Go", "Rust", "TypeScript", "MongoDB", "PostgreSQL", "Redis",
            "GraphQL", "REST APIs", "Microservices", "DevOps", "CI/CD", "Linux", "Bash",
            "Figma", "Adobe Creative Suite", "Sketch", "Photoshop", "Illustrator",
            "Google Analytics", "SEO", "SEM", "Social Media Management", "Content Marketing",
        ]),
        soft_skills: strings(&[
            "Communication", "Leadership", "Problem Solving", "Critical Thinking", "Creativity",
            "Teamwork", "Adaptability", "Time Management", "Project Management", "Strategic Thinking",
            "Emotional Intelligence", "Negotiation", "Public Speaking", "Writing", "Research",
            "Analytical Thinking", "Decision Making", "Mentoring", "Conflict Resolution",
            "Customer Service", "Sales", "Marketing", "Business Development",
        ]),
        industries: strings(&[
            "Technology", "Healthcare", "Finance", "Education", "Retail", "Manufacturing",
            "Consulting", "Marketing", "Design", "Non-profit", "Government", "Entertainment",
            "Real Estate", "Transportation", "Energy", "Agriculture", "Telecommunications",
        ]),
        work_environments: strings(&[
            "Remote-friendly", "Office-based", "Hybrid", "Travel required", "Field work",
            "Collaborative", "Independent", "Fast-paced", "Structured", "Creative",
            "Research-oriented", "Customer-facing", "Team-based", "Leadership role",
        ]),
        values: strings(&[
            "Work-life balance", "High compensation", "Career growth", "Job security",
            "Making an impact", "Creativity", "Innovation", "Helping others",
            "Intellectual challenge", "Autonomy", "Recognition", "Flexibility",
        ]),
    }
}
