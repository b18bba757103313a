//! Local mentor directory and matching.
//!
//! Score per mentor:
//! - +2 when the new hire's position equals one of the mentor's roles
//! - +1 per distinct mentor area found among the hire's skills or languages
//!
//! Highest score wins, earlier directory entries win ties. Nobody scoring
//! above zero means the default mentor.

use serde::{Deserialize, Serialize};

use crate::screening::normalize::{intersect_count, normalize};

const ROLE_MATCH_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mentor {
    pub name: String,
    pub email: String,
    pub dept: String,
}

struct DirectoryEntry {
    name: &'static str,
    email: &'static str,
    dept: &'static str,
    roles: &'static [&'static str],
    areas: &'static [&'static str],
}

impl DirectoryEntry {
    fn to_mentor(&self) -> Mentor {
        Mentor {
            name: self.name.to_string(),
            email: self.email.to_string(),
            dept: self.dept.to_string(),
        }
    }
}

static DIRECTORY: [DirectoryEntry; 4] = [
    DirectoryEntry {
        name: "Dr. Sarah Tan",
        email: "sarah.tan@company.com",
        dept: "AI & SWE",
        roles: &["Software Engineer"],
        areas: &["python", "java", "c++", "backend", "ai", "machine learning"],
    },
    DirectoryEntry {
        name: "Jason Lim",
        email: "jason.lim@company.com",
        dept: "Frontend",
        roles: &["Data Scientist"],
        areas: &["javascript", "typescript", "react", "css", "html", "frontend"],
    },
    DirectoryEntry {
        name: "Divya Nair",
        email: "divya.nair@company.com",
        dept: "QA/Automation",
        roles: &["Product Manager"],
        areas: &["testing", "cypress", "selenium", "qa", "automation"],
    },
    DirectoryEntry {
        name: "Ben Tan",
        email: "ben.tan@company.com",
        dept: "Platform",
        roles: &[],
        areas: &["docker", "kubernetes", "aws", "devops", "platform"],
    },
];

/// Index into `DIRECTORY` used when nothing matches.
const DEFAULT_MENTOR: usize = 3;

/// What the matcher knows about a new hire.
#[derive(Debug, Clone, Default)]
pub struct MentorProfile {
    pub position: String,
    pub skills: Vec<String>,
    pub languages: Vec<String>,
}

fn score_entry(entry: &DirectoryEntry, profile: &MentorProfile) -> usize {
    let position = normalize(&profile.position);
    let role_points = if !position.is_empty() && entry.roles.iter().any(|r| normalize(r) == position) {
        ROLE_MATCH_POINTS
    } else {
        0
    };

    let known: Vec<&str> = profile
        .skills
        .iter()
        .chain(profile.languages.iter())
        .map(String::as_str)
        .collect();

    role_points + intersect_count(entry.areas, &known)
}

pub fn match_mentor(profile: &MentorProfile) -> Mentor {
    let mut best: Option<(usize, &DirectoryEntry)> = None;
    for entry in &DIRECTORY {
        let score = score_entry(entry, profile);
        if score > 0 && best.map_or(true, |(top, _)| score > top) {
            best = Some((score, entry));
        }
    }
    best.map(|(_, entry)| entry)
        .unwrap_or(&DIRECTORY[DEFAULT_MENTOR])
        .to_mentor()
}
