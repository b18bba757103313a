use serde::{Deserialize, Deserializer, Serialize};

/// One resume record in the working set.
///
/// Decoding is lenient: any field may be absent or `null` and falls back to
/// its empty value, so a half-filled import never fails the whole batch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_exp: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<EducationEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub projects: Vec<ProjectEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
    /// Only consulted by mentor matching.
    #[serde(default, deserialize_with = "null_as_default")]
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    /// Level as supplied, e.g. "Bachelor". Ranked through [`EducationLevel`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Fixed education order. Declaration order is the rank order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[default]
    #[serde(rename = "High School")]
    HighSchool,
    Diploma,
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    Phd,
}

impl EducationLevel {
    pub const ALL: [EducationLevel; 5] = [
        EducationLevel::HighSchool,
        EducationLevel::Diploma,
        EducationLevel::Bachelor,
        EducationLevel::Master,
        EducationLevel::Phd,
    ];

    /// High School = 0 … PhD = 4.
    pub fn rank(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            EducationLevel::HighSchool => "High School",
            EducationLevel::Diploma => "Diploma",
            EducationLevel::Bachelor => "Bachelor",
            EducationLevel::Master => "Master",
            EducationLevel::Phd => "PhD",
        }
    }

    /// Resolves free-text level names, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<EducationLevel> {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(wanted))
    }
}

impl EducationEntry {
    /// Rank of this entry; unknown levels rank lowest.
    pub fn rank(&self) -> u32 {
        EducationLevel::parse(&self.level)
            .map(EducationLevel::rank)
            .unwrap_or(0)
    }
}

impl Candidate {
    /// Highest education rank across all entries, 0 when there are none.
    pub fn top_education_rank(&self) -> u32 {
        self.education
            .iter()
            .map(EducationEntry::rank)
            .max()
            .unwrap_or(0)
    }
}

/// A candidate with its derived relevance score. The source record is cloned,
/// never modified in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub score: f64,
}

pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Import services may hand out integer ids; the screener treats ids as
/// opaque strings.
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(s)) => s,
        Some(RawId::Int(n)) => n.to_string(),
        Some(RawId::Float(f)) => f.to_string(),
        None => String::new(),
    })
}
