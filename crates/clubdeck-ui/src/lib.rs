#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # clubdeck-ui
//!
//! State machines behind the clubdeck interaction layer.
//!
//! Every component here keeps its state-transition logic separate from
//! anything host-specific, so the same machines drive the terminal admin
//! console and the test suite alike:
//! - **table_pager** - searchable, paginated table over a fixed row set
//! - **popup** - modal open/close with animation-phase sequencing
//! - **dropdown** - toggleable menus with an exclusive registry
//! - **scroll_lock** - shared scroll freeze/restore across nested popups
//! - **message** - status banner with a tone
//!
//! ## Example
//!
//! ```rust
//! use clubdeck_ui::table_pager::{Row, TablePager, TableSpec};
//!
//! let rows = vec![
//!     Row::new(["alice@acme.test", "owner"]),
//!     Row::new(["bob@beta.test", "coach"]),
//! ];
//! let mut pager = TablePager::new(TableSpec::users(), rows);
//! pager.filter("acme");
//! assert_eq!(pager.page_view().total, 1);
//! ```

pub mod dropdown;
pub mod message;
pub mod popup;
pub mod scroll_lock;
pub mod table_pager;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dropdown::{Dropdown, DropdownId, DropdownRegistry, Propagation};
    pub use crate::message::{MessageBox, Tone};
    pub use crate::popup::{
        ClickTarget, CloseMode, Effect, InitialFocus, LockMode, Pending, Phase, Popup,
    };
    pub use crate::scroll_lock::{Offset, ScrollLock, SharedScrollLock};
    pub use crate::table_pager::{PageView, Row, TablePager, TableSpec};
}
