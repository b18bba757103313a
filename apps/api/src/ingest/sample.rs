use crate::models::candidate::{Candidate, EducationEntry, ProjectEntry};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn education(level: &str, field: &str, institution: &str) -> EducationEntry {
    EducationEntry {
        level: level.to_string(),
        field: Some(field.to_string()),
        institution: Some(institution.to_string()),
    }
}

fn project(title: &str, description: Option<&str>) -> ProjectEntry {
    ProjectEntry {
        title: Some(title.to_string()),
        description: description.map(String::from),
    }
}

/// Built-in demo working set, loaded at startup and by "Use Sample".
pub fn sample_candidates() -> Vec<Candidate> {
    vec![
        Candidate {
            id: "R-001".to_string(),
            name: "Aisha Rahman".to_string(),
            email: "aisha@example.com".to_string(),
            phone: "+60-12-3456789".to_string(),
            location: "Kuala Lumpur".to_string(),
            years_exp: 3.0,
            education: vec![education("Bachelor", "Computer Science", "UM")],
            skills: strings(&["JavaScript", "React", "CSS", "Node.js", "REST"]),
            projects: vec![
                project("Inventory App", Some("Built MERN app")),
                project("Portfolio", Some("Responsive site")),
            ],
            certifications: strings(&["AWS Cloud Practitioner"]),
            summary: "Frontend dev with React focus, built dashboards and component libraries."
                .to_string(),
            languages: vec![],
        },
        Candidate {
            id: "R-002".to_string(),
            name: "Ben Tan".to_string(),
            email: "ben.tan@example.com".to_string(),
            phone: "+60-17-2223344".to_string(),
            location: "Penang".to_string(),
            years_exp: 6.0,
            education: vec![education("Master", "Software Engineering", "USM")],
            skills: strings(&["TypeScript", "React", "Next.js", "GraphQL", "Leadership"]),
            projects: vec![
                project("E-commerce", Some("SSR storefront")),
                project("Design System", Some("Built TS component lib")),
                project("ML Ops", Some("Infra glue")),
            ],
            certifications: strings(&["Scrum Master"]),
            summary: "Lead FE engineer, managed 4 devs, shipped high-traffic SPAs.".to_string(),
            languages: vec![],
        },
        Candidate {
            id: "R-003".to_string(),
            name: "Chong Wei Lim".to_string(),
            email: "cw.lim@example.com".to_string(),
            phone: "+60-13-9988776".to_string(),
            location: "Ipoh".to_string(),
            years_exp: 1.0,
            education: vec![education("Diploma", "IT", "UTAR")],
            skills: strings(&["HTML", "CSS", "JavaScript", "Figma"]),
            projects: vec![project("Landing Pages", None)],
            certifications: vec![],
            summary: "Junior web dev; strong on UI polish and accessibility.".to_string(),
            languages: vec![],
        },
        Candidate {
            id: "R-004".to_string(),
            name: "Divya Nair".to_string(),
            email: "divya.nair@example.com".to_string(),
            phone: "+60-11-5554443".to_string(),
            location: "Johor Bahru".to_string(),
            years_exp: 4.0,
            education: vec![education("Bachelor", "Information Systems", "UTM")],
            skills: strings(&["React", "Redux", "Testing", "Cypress", "REST", "Docker"]),
            projects: vec![
                project("Analytics Dashboard", None),
                project("QA Automation", None),
            ],
            certifications: strings(&["ISTQB"]),
            summary: "SWE with testing focus; shipped stable dashboards.".to_string(),
            languages: vec![],
        },
    ]
}
