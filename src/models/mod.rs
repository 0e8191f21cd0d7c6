//! Simulation domain models.
//!
//! Provides the process record that policy engines mutate and the
//! timeline they append to.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Input parameters plus per-run bookkeeping |
//! | `GanttEntry` | One contiguous slice of CPU time |
//! | `Timeline` | Ordered slices; stamps completion metrics |

mod process;
mod timeline;

pub use process::{Pid, Process};
pub use timeline::{GanttEntry, Timeline};
