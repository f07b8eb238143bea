//! Request and response payloads for the auth, onboarding, and task
//! creation endpoints.

use crate::credential::domain::Role;
use crate::gateway::domain::SkillId;
use serde::{Deserialize, Serialize};

/// Payload for `POST /api/auth/register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Display name of the new account.
    pub username: String,
    /// Login email.
    pub email: String,
    /// Plain password; the transport layer is responsible for TLS.
    pub password: String,
}

/// Payload for `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email.
    pub email: String,
    /// Plain password.
    pub password: String,
}

/// Response of `POST /api/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent calls.
    pub token: String,
}

/// Payload for `POST /api/profiles/onboarding`.
///
/// A customer submits only the role; an executor additionally fills in the
/// profile fields collected by the onboarding form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    /// Chosen role.
    pub role: Role,
    /// Executor city.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Executor experience in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    /// Free-text profile description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Radius the executor is willing to travel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_radius_km: Option<u32>,
    /// Selected skill ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skill_ids: Vec<SkillId>,
}

impl OnboardingRequest {
    /// Creates a customer onboarding payload (role only).
    #[must_use]
    pub const fn customer() -> Self {
        Self {
            role: Role::Customer,
            city: None,
            experience: None,
            description: None,
            work_radius_km: None,
            skill_ids: Vec::new(),
        }
    }

    /// Creates an executor onboarding payload for the given city.
    #[must_use]
    pub fn executor(city: impl Into<String>) -> Self {
        Self {
            role: Role::Executor,
            city: Some(city.into()),
            experience: None,
            description: None,
            work_radius_km: None,
            skill_ids: Vec::new(),
        }
    }

    /// Sets the experience in years.
    #[must_use]
    pub const fn with_experience(mut self, years: u32) -> Self {
        self.experience = Some(years);
        self
    }

    /// Sets the profile description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the work radius in kilometres.
    #[must_use]
    pub const fn with_work_radius_km(mut self, radius: u32) -> Self {
        self.work_radius_km = Some(radius);
        self
    }

    /// Sets the selected skills.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = SkillId>) -> Self {
        self.skill_ids = skills.into_iter().collect();
        self
    }
}

/// Payload for `POST /api/tasks`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Task title.
    pub title: String,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// City the task is located in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Required skill ids.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skill_ids: Vec<SkillId>,
}

impl CreateTaskRequest {
    /// Creates a task payload with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            city: None,
            skill_ids: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the required skills.
    #[must_use]
    pub fn with_skills(mut self, skills: impl IntoIterator<Item = SkillId>) -> Self {
        self.skill_ids = skills.into_iter().collect();
        self
    }
}
