//! Selectable Filtered List
//!
//! Список с поиском, мультивыбором и отправкой выбранного во внешний приёмник.
//!
//! Selection lives independently of the current filter: items stay selected
//! while hidden by the query and show up checked again once visible.
//!
//! ## Использование
//!
//! ```text
//! use crate::shared::selectable_list::{SelectableItem, SelectableList, RowContext};
//!
//! impl SelectableItem for MyItem { ... }
//!
//! view! {
//!     <SelectableList
//!         dataset=items
//!         title="PICKER"
//!         search_placeholder="Search..."
//!         no_results_message="Nothing found"
//!         render_row=my_row
//!         on_commit=handler
//!         commit_timeout_ms=15000
//!         error_display_ms=2000
//!     />
//! }
//! ```

pub mod commit;
pub mod component;
pub mod state;
pub mod traits;

pub use commit::{run_commit, CommitError, CommitFuture, CommitHandler};
pub use component::{RowCheckbox, RowContext, SelectableList};
pub use state::{
    CommitButton, CommitControl, CommitTicket, SelectableFilteredList, DEFAULT_ERROR_LABEL,
};
pub use traits::{default_predicate, matches_query, ListFilter, Predicate, SelectableItem};
