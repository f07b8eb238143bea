//! Pure projection of task state into a render plan.
//!
//! One pure function over (task snapshot, caller role, navigation context,
//! local applied flag) answers "what can this caller see and do" for every
//! view. The projection only hides actions that are obviously invalid; it
//! never grants authority, and the server re-validates every mutating call.

pub mod domain;

#[cfg(test)]
mod tests;
