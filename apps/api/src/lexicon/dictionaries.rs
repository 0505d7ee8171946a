//! Static word lists shared by the resume scorer and the job matcher.
//!
//! Every entry is lower-case. Matching is substring containment against
//! lower-cased text, so short entries (`r`, `go`, `ms`) match liberally.

/// Technical and domain skills recognised by the resume keyword module.
pub const HARD_SKILLS: &[&str] = &[
    // programming & development
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust",
    "swift", "kotlin", "php", "scala", "r", "matlab", "sql", "nosql", "graphql",
    "html", "css", "sass", "less", "react", "angular", "vue", "svelte", "next.js",
    "node.js", "express", "django", "flask", "spring", "laravel", "rails",
    "docker", "kubernetes", "terraform", "ansible", "jenkins", "github actions",
    "aws", "azure", "gcp", "google cloud", "heroku", "vercel",
    "mongodb", "postgresql", "mysql", "redis", "elasticsearch", "dynamodb",
    "git", "linux", "bash", "powershell", "rest api", "microservices",
    "machine learning", "deep learning", "nlp", "computer vision", "tensorflow",
    "pytorch", "scikit-learn", "pandas", "numpy", "spark", "hadoop",
    // design
    "figma", "sketch", "adobe suite", "photoshop", "illustrator", "indesign",
    "after effects", "premiere pro", "blender", "autocad", "solidworks",
    // business & analytics
    "excel", "power bi", "tableau", "salesforce", "hubspot", "sap", "oracle",
    "google analytics", "data analysis", "data visualization", "business intelligence",
    "financial modeling", "forecasting", "budgeting",
    // methodologies
    "agile", "scrum", "kanban", "waterfall", "six sigma", "lean", "devops",
    "ci/cd", "tdd", "bdd", "oop", "functional programming",
    // marketing
    "seo", "sem", "ppc", "google ads", "facebook ads", "content marketing",
    "email marketing", "social media marketing", "copywriting", "a/b testing",
    // tooling & practice
    "jira", "confluence", "trello", "asana", "slack", "microsoft office",
    "project management", "product management", "ux design", "ui design",
    "user research", "wireframing", "prototyping", "usability testing",
    "blockchain", "cybersecurity", "networking", "cloud computing",
];

pub const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving", "problem-solving",
    "critical thinking", "time management", "adaptability", "creativity",
    "collaboration", "negotiation", "conflict resolution", "decision making",
    "decision-making", "attention to detail", "strategic thinking", "mentoring",
    "coaching", "presentation", "public speaking", "writing", "interpersonal",
    "organizational", "multitasking", "self-motivated", "initiative",
    "analytical", "research", "planning", "customer service", "empathy",
    "emotional intelligence", "flexibility", "resilience", "accountability",
    "work ethic", "verbal communication", "written communication",
];

/// Skills the job matcher compares between a CV and a posting. Overlaps with
/// [`HARD_SKILLS`] but also carries a handful of soft skills.
pub const JOB_SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "c++", "c#", "ruby", "go", "rust",
    "swift", "kotlin", "php", "scala", "r", "sql", "nosql", "graphql",
    "html", "css", "react", "angular", "vue", "node.js", "next.js",
    "django", "flask", "spring", "express", "laravel", "rails",
    "docker", "kubernetes", "terraform", "ansible", "jenkins",
    "aws", "azure", "gcp", "google cloud", "heroku",
    "mongodb", "postgresql", "mysql", "redis", "elasticsearch",
    "git", "linux", "bash", "rest api", "microservices",
    "machine learning", "deep learning", "nlp", "tensorflow", "pytorch",
    "pandas", "numpy", "spark", "hadoop", "scikit-learn",
    "figma", "sketch", "photoshop", "illustrator", "adobe suite",
    "excel", "power bi", "tableau", "salesforce", "sap", "oracle",
    "google analytics", "data analysis", "business intelligence",
    "agile", "scrum", "kanban", "six sigma", "lean", "devops", "ci/cd",
    "seo", "sem", "ppc", "google ads", "content marketing", "email marketing",
    "jira", "confluence", "trello", "asana", "project management", "product management",
    "ux design", "ui design", "wireframing", "prototyping", "user research",
    "communication", "leadership", "teamwork", "problem solving",
    "critical thinking", "time management", "collaboration", "negotiation",
];

/// Every heading the formatting module recognises as a standard section.
pub const STANDARD_SECTIONS: &[&str] = &[
    "work experience", "experience", "professional experience", "employment history",
    "employment", "career history",
    "education", "academic background", "academic", "qualifications",
    "skills", "technical skills", "core competencies", "competencies", "key skills",
    "certifications", "certificates", "licenses", "credentials",
    "summary", "professional summary", "objective", "career objective", "profile",
    "about me", "overview",
    "projects", "portfolio", "key projects",
    "awards", "honors", "achievements", "accomplishments",
    "references",
    "volunteer", "volunteering", "volunteer experience",
    "languages",
    "publications",
    "contact", "contact information", "personal information", "personal details",
];

pub const EXPERIENCE_HEADINGS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "employment",
];

pub const EDUCATION_HEADINGS: &[&str] = &["education", "academic background", "qualifications"];

pub const SKILLS_HEADINGS: &[&str] = &[
    "skills",
    "technical skills",
    "core competencies",
    "competencies",
    "key skills",
];

/// Headings the document intake layer flags as standard when building
/// structural metadata. Narrower than [`STANDARD_SECTIONS`].
pub const INTAKE_HEADINGS: &[&str] = &[
    "work experience", "experience", "professional experience", "employment history",
    "education", "academic background", "qualifications",
    "skills", "technical skills", "core competencies", "competencies",
    "certifications", "certificates", "licenses",
    "summary", "professional summary", "objective", "career objective", "profile",
    "projects", "portfolio",
    "awards", "honors", "achievements",
    "references", "volunteer", "volunteering", "languages",
    "publications", "interests", "hobbies",
    "contact", "contact information", "personal information",
];

/// Degree keyword → ordinal, as scanned by the resume education module.
pub const DEGREE_LEVELS: &[(&str, u8)] = &[
    ("phd", 5), ("ph.d", 5), ("doctorate", 5), ("doctoral", 5),
    ("master", 4), ("masters", 4), ("master's", 4), ("mba", 4), ("msc", 4),
    ("ma", 4), ("ms", 4), ("m.s.", 4),
    ("bachelor", 3), ("bachelors", 3), ("bachelor's", 3), ("bsc", 3),
    ("ba", 3), ("bs", 3), ("b.s.", 3), ("b.a.", 3),
    ("associate", 2), ("associates", 2), ("associate's", 2),
    ("diploma", 1), ("certificate", 1), ("certification", 1),
];

/// Degree keywords searched in a job posting, highest level first wins.
pub const JOB_DEGREE_LEVELS: &[(&str, u8)] = &[
    ("phd", 5), ("ph.d", 5), ("doctorate", 5), ("doctoral", 5),
    ("master", 4), ("masters", 4), ("master's", 4), ("mba", 4),
    ("bachelor", 3), ("bachelors", 3), ("bachelor's", 3),
    ("associate", 2),
    ("diploma", 1),
];

/// Degree keywords searched in a CV by the job matcher.
pub const CV_DEGREE_LEVELS: &[(&str, u8)] = &[
    ("phd", 5), ("ph.d", 5), ("doctorate", 5),
    ("master", 4), ("masters", 4), ("master's", 4), ("mba", 4), ("msc", 4),
    ("bachelor", 3), ("bachelors", 3), ("bachelor's", 3), ("bsc", 3), ("b.s", 3),
    ("associate", 2),
    ("diploma", 1), ("certificate", 1),
];

pub const CERTIFICATIONS: &[&str] = &[
    "pmp", "capm", "prince2", "itil", "cissp", "cism", "cisa",
    "aws certified", "azure certified", "google certified",
    "comptia", "security+", "network+", "a+",
    "cpa", "cfa", "cfp", "frm",
    "phr", "sphr", "shrm",
    "rn", "bsn", "msn",
    "ccna", "ccnp", "ccie",
    "scrum master", "csm", "safe",
    "six sigma", "green belt", "black belt",
    "google analytics certified", "hubspot certified",
    "salesforce certified", "tableau certified",
    "pe ", "p.e.", "licensed",
];

pub const INSTITUTION_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "academy",
    "polytechnic",
];

pub const JOB_TITLE_KEYWORDS: &[&str] = &[
    "manager", "director", "engineer", "developer", "analyst", "specialist",
    "coordinator", "consultant", "administrator", "architect", "designer",
    "lead", "senior", "junior", "intern", "associate", "vice president", "vp",
    "chief", "ceo", "cto", "cfo", "coo", "president", "founder", "co-founder",
    "supervisor", "technician", "officer", "executive", "head of", "team lead",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved", "accelerated", "accomplished", "administered", "advanced",
    "analyzed", "architected", "automated", "built", "championed",
    "collaborated", "consolidated", "coordinated", "created", "decreased",
    "delivered", "designed", "developed", "directed", "drove",
    "eliminated", "engineered", "established", "exceeded", "executed",
    "expanded", "facilitated", "generated", "grew", "headed",
    "implemented", "improved", "increased", "initiated", "innovated",
    "integrated", "launched", "led", "managed", "mentored",
    "modernized", "negotiated", "optimized", "orchestrated", "organized",
    "overhauled", "oversaw", "partnered", "pioneered", "planned",
    "produced", "propelled", "reduced", "re-engineered", "resolved",
    "restructured", "revamped", "scaled", "secured", "simplified",
    "spearheaded", "streamlined", "strengthened", "supervised", "surpassed",
    "trained", "transformed", "upgraded",
];

pub const BUZZWORDS: &[&str] = &[
    "synergy", "paradigm", "leverage", "utilize", "facilitate", "ecosystem",
    "disrupt", "bandwidth", "touchpoint", "circle back", "deep dive",
    "move the needle", "low-hanging fruit", "best of breed",
];

/// Glyphs that tend to trip up ATS text extraction.
pub const DECORATIVE_GLYPHS: &[char] = &[
    '│', '┃', '┆', '┇', '┊', '┋', '╎', '╏', '║', '╟', '╢', '╫', '╬', '▶', '►', '▸', '▹',
    '◆', '◇', '○', '●', '■', '□', '★', '☆', '♦', '♣', '♠', '♥', '→', '←', '↑', '↓', '⇒', '⇐',
];

/// Words dropped before significant-keyword extraction.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for",
    "of", "with", "by", "from", "is", "are", "was", "were", "be", "been",
    "being", "have", "has", "had", "do", "does", "did", "will", "would",
    "could", "should", "may", "might", "shall", "can", "need", "must",
    "this", "that", "these", "those", "it", "its", "we", "our", "you",
    "your", "they", "their", "he", "she", "him", "her", "who", "which",
    "what", "when", "where", "how", "why", "all", "each", "every", "both",
    "few", "more", "most", "other", "some", "such", "no", "not", "only",
    "same", "so", "than", "too", "very", "just", "about", "above", "also",
    "as", "if", "then", "up", "out", "into", "over", "after", "before",
    "between", "under", "again", "further", "once", "here", "there",
    "any", "able", "work", "working", "experience", "including",
    "within", "across", "well", "role", "position", "candidate",
    "required", "preferred", "minimum", "strong", "excellent",
    "ability", "skills", "knowledge", "requirements", "qualifications",
    "responsibilities", "duties", "looking", "seeking", "join",
];
