// Table module - the view-state engine
//
// Turns a base record collection plus user interactions into the rendered
// ordering and selection shown by the TUI:
// - record: Record/Row/RowId types and column access
// - filter: per-column case-insensitive substring predicates
// - sort: stable single-column ordering
// - reorder: drag-style move within the base order
// - store: ViewState, the single owner of all of the above
// - export: selection projection and CSV output

pub mod export;
pub mod filter;
pub mod record;
pub mod reorder;
pub mod sort;
pub mod store;

pub use record::{Field, Record};
pub use store::ViewState;
