//! Built-in career, stack and override tables

pub(super) struct CareerEntry {
    pub name: &'static str,
    pub skills: &'static [&'static str],
    pub keywords: &'static [&'static str],
}

pub(super) const CAREERS: &[CareerEntry] = &[
    CareerEntry {
        name: "Software Engineer",
        skills: &[
            "Python", "Java", "JavaScript", "C++", "TypeScript", "React", "Node.js",
            "Django", "Flask", "FastAPI", "REST API", "GraphQL", "SQL", "MongoDB",
            "PostgreSQL", "Git", "Docker", "Kubernetes", "AWS", "Azure", "GCP",
            "CI/CD", "Agile", "Scrum", "Testing", "Debugging", "Problem Solving",
            "Data Structures", "Algorithms", "System Design", "OOP",
        ],
        keywords: &["software", "developer", "programming", "coding", "engineering"],
    },
    CareerEntry {
        name: "Data Scientist",
        skills: &[
            "Python", "R", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch",
            "Scikit-learn", "Pandas", "NumPy", "SQL", "Statistics", "Mathematics",
            "Data Visualization", "Tableau", "Power BI", "A/B Testing", "NLP",
            "Computer Vision", "Feature Engineering", "Model Deployment", "MLOps",
            "Jupyter", "Data Mining", "Big Data", "Spark", "Hadoop",
        ],
        keywords: &["data", "analytics", "machine learning", "AI", "statistics"],
    },
    CareerEntry {
        name: "Data Analyst",
        skills: &[
            "SQL", "Excel", "Python", "R", "Tableau", "Power BI", "Statistics",
            "Data Visualization", "Business Intelligence", "ETL", "Data Cleaning",
            "Data Mining", "Dashboard Creation", "Reporting", "Forecasting",
            "A/B Testing", "Google Analytics", "Looker", "Pandas", "NumPy",
        ],
        keywords: &["analyst", "analytics", "reporting", "business intelligence", "insights"],
    },
    CareerEntry {
        name: "DevOps Engineer",
        skills: &[
            "Docker", "Kubernetes", "Jenkins", "CI/CD", "AWS", "Azure", "GCP",
            "Terraform", "Ansible", "Git", "Linux", "Shell Scripting", "Python",
            "Monitoring", "Grafana", "Prometheus", "ELK Stack", "Nginx", "Load Balancing",
            "Security", "Networking", "Infrastructure as Code", "Microservices",
        ],
        keywords: &["devops", "infrastructure", "deployment", "automation", "cloud"],
    },
    CareerEntry {
        name: "Full Stack Developer",
        skills: &[
            "JavaScript", "TypeScript", "React", "Angular", "Vue.js", "Node.js",
            "Express.js", "HTML", "CSS", "REST API", "GraphQL", "MongoDB", "PostgreSQL",
            "MySQL", "Git", "Docker", "AWS", "Authentication", "Testing", "Redux",
            "Next.js", "Tailwind CSS", "Bootstrap", "Responsive Design",
        ],
        keywords: &["full stack", "frontend", "backend", "web development"],
    },
    CareerEntry {
        name: "Machine Learning Engineer",
        skills: &[
            "Python", "Machine Learning", "Deep Learning", "TensorFlow", "PyTorch",
            "Scikit-learn", "MLOps", "Model Deployment", "Docker", "Kubernetes",
            "AWS", "Feature Engineering", "Data Preprocessing", "Model Optimization",
            "APIs", "Git", "CI/CD", "Monitoring", "Mathematics", "Statistics",
            "Computer Vision", "NLP", "Neural Networks",
        ],
        keywords: &["machine learning", "ML engineer", "AI", "model deployment"],
    },
    CareerEntry {
        name: "Product Manager",
        skills: &[
            "Product Strategy", "Roadmapping", "User Research", "Wireframing",
            "A/B Testing", "Analytics", "SQL", "Agile", "Scrum", "JIRA",
            "Communication", "Stakeholder Management", "Market Research",
            "Competitive Analysis", "User Stories", "Product Development",
            "Prioritization", "Data Analysis", "UX/UI", "Leadership",
        ],
        keywords: &["product", "management", "strategy", "roadmap", "user experience"],
    },
    CareerEntry {
        name: "UI/UX Designer",
        skills: &[
            "Figma", "Adobe XD", "Sketch", "Wireframing", "Prototyping",
            "User Research", "Usability Testing", "Design Systems", "Typography",
            "Color Theory", "Responsive Design", "Mobile Design", "Web Design",
            "HTML", "CSS", "User Flows", "Information Architecture",
            "Accessibility", "Visual Design", "Adobe Creative Suite",
        ],
        keywords: &["design", "UX", "UI", "user experience", "interface"],
    },
    CareerEntry {
        name: "Cloud Architect",
        skills: &[
            "AWS", "Azure", "GCP", "Cloud Architecture", "Microservices",
            "Kubernetes", "Docker", "Serverless", "Lambda", "EC2", "S3",
            "Security", "Networking", "Load Balancing", "High Availability",
            "Disaster Recovery", "Cost Optimization", "Infrastructure as Code",
            "Terraform", "CloudFormation", "Monitoring",
        ],
        keywords: &["cloud", "architect", "infrastructure", "scalability"],
    },
    CareerEntry {
        name: "Cybersecurity Analyst",
        skills: &[
            "Security", "Network Security", "Penetration Testing", "Vulnerability Assessment",
            "SIEM", "Firewall", "Intrusion Detection", "Encryption", "Risk Assessment",
            "Compliance", "ISO 27001", "NIST", "Ethical Hacking", "Malware Analysis",
            "Security Auditing", "Python", "Linux", "Windows Security", "Cloud Security",
        ],
        keywords: &["security", "cybersecurity", "penetration", "threat", "protection"],
    },
    CareerEntry {
        name: "Business Analyst",
        skills: &[
            "Requirements Gathering", "Business Process Modeling", "SQL", "Excel",
            "Data Analysis", "Documentation", "Stakeholder Management", "JIRA",
            "Agile", "Scrum", "Wireframing", "Use Cases", "User Stories",
            "Business Intelligence", "Power BI", "Tableau", "Communication",
            "Problem Solving", "Process Improvement",
        ],
        keywords: &["business", "analyst", "requirements", "process", "stakeholder"],
    },
    CareerEntry {
        name: "Mobile Developer",
        skills: &[
            "React Native", "Flutter", "Swift", "Kotlin", "Java", "iOS", "Android",
            "Mobile UI/UX", "REST API", "Firebase", "Push Notifications",
            "App Store", "Google Play", "Git", "Testing", "Debugging",
            "Performance Optimization", "Mobile Security", "Responsive Design",
        ],
        keywords: &["mobile", "iOS", "android", "app development"],
    },
];

/// Technologies specific to a stack. Anything absent here is universal.
pub(super) const STACKS: &[(&str, &[&str])] = &[
    (
        "Python",
        &[
            "Python", "Django", "Flask", "FastAPI", "Pandas", "NumPy",
            "Jupyter", "Scikit-learn", "TensorFlow", "PyTorch",
        ],
    ),
    (
        "JavaScript / TypeScript",
        &[
            "JavaScript", "TypeScript", "React", "Angular", "Vue.js",
            "Node.js", "Express.js", "Next.js", "Redux",
        ],
    ),
    ("Java", &["Java"]),
    ("C++", &["C++"]),
    ("Swift / iOS", &["Swift", "iOS"]),
    ("Kotlin / Android", &["Kotlin", "Android"]),
    ("React Native", &["React Native"]),
    ("Flutter", &["Flutter"]),
    ("R", &["R"]),
];

/// (career, stack, replacement skills)
pub(super) const OVERRIDES: &[(&str, &str, &[&str])] = &[
    (
        "Full Stack Developer",
        "Python",
        &[
            "Python", "Django", "Flask", "JavaScript", "React", "HTML", "CSS",
            "REST API", "GraphQL", "PostgreSQL", "MongoDB", "Git", "Docker",
            "AWS", "Authentication", "Testing", "Tailwind CSS", "Responsive Design",
        ],
    ),
    (
        "Full Stack Developer",
        "JavaScript / TypeScript",
        &[
            "JavaScript", "TypeScript", "React", "Node.js", "Express.js",
            "Next.js", "HTML", "CSS", "REST API", "GraphQL", "MongoDB",
            "PostgreSQL", "Git", "Docker", "AWS", "Authentication", "Testing",
            "Redux", "Tailwind CSS", "Responsive Design",
        ],
    ),
    (
        "Full Stack Developer",
        "Java",
        &[
            "Java", "JavaScript", "React", "HTML", "CSS",
            "REST API", "GraphQL", "PostgreSQL", "MongoDB", "Git", "Docker",
            "AWS", "Authentication", "Testing", "Responsive Design",
        ],
    ),
    (
        "Mobile Developer",
        "Swift / iOS",
        &[
            "Swift", "iOS", "Mobile UI/UX", "REST API", "Firebase",
            "Push Notifications", "App Store", "Git", "Testing", "Debugging",
            "Performance Optimization", "Mobile Security",
        ],
    ),
    (
        "Mobile Developer",
        "Kotlin / Android",
        &[
            "Kotlin", "Android", "Mobile UI/UX", "REST API", "Firebase",
            "Push Notifications", "Google Play", "Git", "Testing", "Debugging",
            "Performance Optimization", "Mobile Security",
        ],
    ),
    (
        "Mobile Developer",
        "React Native",
        &[
            "React Native", "JavaScript", "TypeScript", "Mobile UI/UX", "REST API",
            "Firebase", "Push Notifications", "App Store", "Google Play", "Git",
            "Testing", "Debugging", "Performance Optimization", "Mobile Security",
        ],
    ),
    (
        "Mobile Developer",
        "Flutter",
        &[
            "Flutter", "Mobile UI/UX", "REST API", "Firebase",
            "Push Notifications", "App Store", "Google Play", "Git",
            "Testing", "Debugging", "Performance Optimization", "Mobile Security",
        ],
    ),
];

/// Onboarding role identifiers and the career each one selects.
pub(crate) const ROLE_IDENTIFIERS: &[(&str, &str)] = &[
    ("software_engineer", "Software Engineer"),
    ("data_scientist", "Data Scientist"),
    ("data_analyst", "Data Analyst"),
    ("devops_engineer", "DevOps Engineer"),
    ("full_stack_developer", "Full Stack Developer"),
    ("ml_engineer", "Machine Learning Engineer"),
    ("product_manager", "Product Manager"),
    ("ux_ui_designer", "UI/UX Designer"),
    ("cloud_architect", "Cloud Architect"),
    ("cybersecurity_analyst", "Cybersecurity Analyst"),
    ("business_analyst", "Business Analyst"),
    ("mobile_developer", "Mobile Developer"),
];
