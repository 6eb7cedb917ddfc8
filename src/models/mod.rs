//! Scheduling domain models.
//!
//! Core data types for the scheduling problem and its solution. The input
//! side is a flat table of [`Task`]s whose slice order defines the
//! deterministic tie-break; the output side is a [`Schedule`] of immutable
//! per-task entries.
//!
//! # Domain Mappings
//!
//! | dagplan | Incident Response | Manufacturing | Project Planning |
//! |---------|-------------------|---------------|------------------|
//! | Task | Recovery step | Operation | Activity |
//! | Worker slot | Technician | Machine | Crew member |
//! | Schedule | Recovery timeline | Production plan | Gantt baseline |

mod schedule;
mod task;

pub use schedule::{Schedule, ScheduledTask};
pub use task::Task;
