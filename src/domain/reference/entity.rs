//! Reference lookup entities
//!
//! Divisions, departments, school years, countries and recruitment events are
//! managed elsewhere; this module only reads them, as scoped-query filter keys
//! and as foreign-key targets during payload validation.

/// The five reference tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Division,
    Department,
    SchoolYear,
    Country,
    RecruitmentEvent,
}

impl ReferenceKind {
    /// Backing table name
    pub fn table(&self) -> &'static str {
        match self {
            Self::Division => "divisions",
            Self::Department => "departments",
            Self::SchoolYear => "school_years",
            Self::Country => "countries",
            Self::RecruitmentEvent => "recruitment_events",
        }
    }

    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            Self::Division => "Division",
            Self::Department => "Department",
            Self::SchoolYear => "School year",
            Self::Country => "Country",
            Self::RecruitmentEvent => "Recruitment event",
        }
    }
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A resolved reference row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntity {
    pub kind: ReferenceKind,
    pub id: i32,
    pub name: String,
}
