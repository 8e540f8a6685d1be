/// Per-view state containers
///
/// Each view owns one of these exclusively. They decide when a fetch is due
/// and which completions still apply; they never perform I/O themselves.
pub mod detail;
pub mod edit_draft;
pub mod load_state;
pub mod paged_list;
pub mod sequencer;
pub mod text_filter;

pub use detail::DetailState;
pub use edit_draft::EditDraft;
pub use load_state::{describe_error, LoadState};
pub use paged_list::{ListQuery, PagedListState};
pub use sequencer::{FetchTicket, RequestSequencer};
pub use text_filter::TextFilter;
