//! Print Renderer: serializes candidates into a standalone HTML document.
//!
//! Output is a plain string. Opening a window or invoking a print dialog is
//! the caller's business.

use crate::models::candidate::{Candidate, EducationEntry, ProjectEntry, ScoredCandidate};

const PRINT_STYLE: &str = r#"<style>
  * { box-sizing: border-box; }
  body { font-family: Inter, ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Arial, sans-serif; padding: 24px; color: #0f172a; }
  h1 { margin: 0 0 16px; }
  .resume { border: 1px solid #e5e7eb; padding: 16px; margin-bottom: 12px; border-radius: 12px; background: #fff; }
  .head { display: flex; justify-content: space-between; align-items: center; gap: 12px; }
  .name { font-size: 18px; font-weight: 800; }
  .meta { display: flex; flex-wrap: wrap; gap: 12px; color: #334155; }
  .tag { display: inline-block; border: 1px solid #cbd5e1; padding: 2px 8px; border-radius: 999px; margin: 2px; font-size: 12px; background: #f8fafc; }
  .score { font-weight: 700; }
  @media print { .resume { break-inside: avoid; } }
</style>"#;

/// One candidate to print. `score` is `None` when the candidate was never scored.
#[derive(Debug, Clone, Copy)]
pub struct PrintEntry<'a> {
    pub candidate: &'a Candidate,
    pub score: Option<f64>,
}

impl<'a> From<&'a Candidate> for PrintEntry<'a> {
    fn from(candidate: &'a Candidate) -> Self {
        Self { candidate, score: None }
    }
}

impl<'a> From<&'a ScoredCandidate> for PrintEntry<'a> {
    fn from(scored: &'a ScoredCandidate) -> Self {
        Self {
            candidate: &scored.candidate,
            score: Some(scored.score),
        }
    }
}

/// Escapes `& < > " '`. Ampersand goes first so later entities are not
/// escaped twice.
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

pub fn render_print_document(entries: &[PrintEntry<'_>]) -> String {
    let mut body = String::from("<h1>Resume Extract</h1>");
    for entry in entries {
        render_entry(&mut body, entry);
    }
    format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"/><title>Resume Extract</title>{PRINT_STYLE}</head><body>{body}</body></html>"
    )
}

fn render_entry(out: &mut String, entry: &PrintEntry<'_>) {
    let c = entry.candidate;

    out.push_str("<div class=\"resume\"><div class=\"head\"><div>");
    out.push_str(&format!("<div class=\"name\">{}</div>", escape_html(&c.name)));
    out.push_str(&format!(
        "<div class=\"meta\"><span>{}</span><span>{}</span><span>{}</span><span>{} yrs</span></div>",
        escape_html(&c.email),
        escape_html(&c.phone),
        escape_html(&c.location),
        format_number(c.years_exp),
    ));
    out.push_str("</div>");
    // presence, not truthiness: a score of 0 still prints
    if let Some(score) = entry.score {
        out.push_str(&format!("<div class=\"score\">Score: {}</div>", format_number(score)));
    }
    out.push_str("</div>");

    if !c.summary.is_empty() {
        out.push_str(&format!("<p>{}</p>", escape_html(&c.summary)));
    }

    let tags: Vec<String> = c
        .skills
        .iter()
        .map(|s| format!("<span class=\"tag\">{}</span>", escape_html(s)))
        .collect();
    out.push_str(&format!("<div><strong>Skills:</strong> {}</div>", tags.join(" ")));

    if !c.education.is_empty() {
        let items: Vec<String> = c.education.iter().map(education_line).collect();
        out.push_str(&format!("<div><strong>Education:</strong> {}</div>", items.join("; ")));
    }
    if !c.projects.is_empty() {
        let items: Vec<String> = c.projects.iter().map(project_line).collect();
        out.push_str(&format!("<div><strong>Projects:</strong> {}</div>", items.join("; ")));
    }
    if !c.certifications.is_empty() {
        let items: Vec<String> = c.certifications.iter().map(|s| escape_html(s)).collect();
        out.push_str(&format!("<div><strong>Certifications:</strong> {}</div>", items.join(", ")));
    }

    out.push_str("</div>");
}

fn education_line(e: &EducationEntry) -> String {
    let mut line = escape_html(&e.level);
    if let Some(field) = e.field.as_deref().filter(|f| !f.is_empty()) {
        line.push_str(&format!(" in {}", escape_html(field)));
    }
    if let Some(institution) = e.institution.as_deref().filter(|i| !i.is_empty()) {
        line.push_str(&format!(" @ {}", escape_html(institution)));
    }
    line
}

fn project_line(p: &ProjectEntry) -> String {
    let mut line = escape_html(p.title.as_deref().unwrap_or(""));
    if let Some(description) = p.description.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" — {}", escape_html(description)));
    }
    line
}

/// Shortest decimal form: 44.0 prints as "44", 44.5 as "44.5".
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
