//! Skill reference data for task creation and onboarding forms.

use super::SkillId;
use serde::{Deserialize, Serialize};

/// A single selectable skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    /// Server-issued skill id.
    pub id: SkillId,
    /// Display name.
    pub name: String,
}

/// A named group of skills.
///
/// Read-only reference data; the client never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Server-issued category id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Skills in this category, in server order.
    #[serde(default)]
    pub skills: Vec<Skill>,
}
