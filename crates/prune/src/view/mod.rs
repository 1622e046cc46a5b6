//! View controllers, one per screen.
//!
//! Each view owns its local state, loads data on activation and talks to the
//! mail API through [`EmailApi`](prune_core::EmailApi).

mod compose;
mod detail;
mod list;

pub use compose::{ComposeOutcome, ComposeView, Submission};
pub use detail::DetailView;
pub use list::{DeleteOutcome, EmailRow, ListView};
