//! Wire model of the marketplace API.
//!
//! Types mirror the server's JSON shapes (`camelCase` field names, numeric
//! ids, naive local datetimes). Fields the server has been observed to omit
//! are optional or defaulted so a partial response never fails to decode.

mod application;
mod ids;
mod price;
mod requests;
mod skill;
mod status;
mod task;

pub use application::{Application, ApplicationCount, ExecutorProfile, MyApplicationRow};
pub use ids::{ApplicationId, ProfileId, SkillId, TaskId};
pub use price::{EmptyPriceError, PriceQuote};
pub use requests::{
    CreateTaskRequest, LoginRequest, LoginResponse, OnboardingRequest, RegisterRequest,
};
pub use skill::{Skill, SkillCategory};
pub use status::{ApplicationStatus, ParseTaskStatusError, TaskStatus};
pub use task::{TaskSnapshot, TaskSummary};
