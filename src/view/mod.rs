//! View services: the load/mutate/re-fetch protocol around a task view.
//!
//! Rendering stays outside the crate; this module owns the protocol the
//! renderer drives. Every mutation is followed either by a full re-fetch
//! of the task snapshot and a re-projection, or by navigating away from
//! the view. The cached snapshot is never mutated locally, because a
//! mutation's side effects (rejecting other applications on approval, for
//! example) are not fully known to the client.

pub mod services;
