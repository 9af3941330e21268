//! Pure filtering over schedule datasets.
//!
//! Everything in this module is a function of `(dataset, selection, policy)`
//! with no hidden state: every host interaction recomputes from the dataset,
//! so stale intermediate results cannot exist.
//!
//! # Pipeline
//!
//! ```text
//! ┌──────────────────┐
//! │ ScheduleDataset  │  immutable, one per upload
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │   date window    │  explicit window, or the dataset's full span
//! └────────┬─────────┘
//!          │
//!          ├──────────────────────────────┐
//! ┌────────▼─────────┐          ┌─────────▼──────────┐
//! │ level membership │          │  derive_options    │
//! │ (main/sub/area)  │          │  (cascading lists) │
//! └────────┬─────────┘          └────────────────────┘
//!          │
//! ┌────────▼─────────┐
//! │ sort + partition │  (sub domain, start date), group by main domain
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │  FilteredResult  │  one DomainGroup per chart
//! └──────────────────┘
//! ```

pub mod filter;
pub mod options;
pub mod selection;

pub use filter::{apply_date_window, effective_window, filter_dataset, DomainGroup, FilteredResult};
pub use options::{derive_options, CascadeOptions};
pub use selection::{FilterPolicy, FilterSelection, NullDatePolicy, WindowMode};
