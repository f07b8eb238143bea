//! Domain types of the lifecycle projection.

mod navigation;
mod plan;
mod project;

pub use navigation::NavigationContext;
pub use plan::RenderPlan;
pub use project::project;
