//! Domain layer for the Talentscope plugin.
//!
//! Pure types and transforms with no Zellij dependency: the candidate model,
//! the filter/sort/paginate pipeline, the selection set, and the strategy
//! traits used for match scores and chat replies.
//!
//! # Organization
//!
//! - [`candidate`]: Candidate and comment models, label parsing
//! - [`filter`]: Filters, facets and the filter set
//! - [`sort`]: Sort options and the stable sort transform
//! - [`pagination`]: Page slicing, navigation and the pager window
//! - [`selection`]: Multi-select set
//! - [`strategy`]: Scoring and chat response strategies
//! - [`error`]: Error types and result aliases
//!
//! # Examples
//!
//! ```
//! use talentscope::domain::{paginate, sort_candidates, FilterSet, SortOption};
//! use talentscope::repository::fixture_candidates;
//!
//! let filters = FilterSet::standard();
//! let visible: Vec<_> = fixture_candidates()
//!     .into_iter()
//!     .filter(|c| filters.matches(c))
//!     .collect();
//! let sorted = sort_candidates(&visible, SortOption::CtcHighToLow);
//! let (page, total) = paginate(&sorted, 1, 6);
//! assert_eq!(page.len(), 6);
//! assert_eq!(total, 2);
//! ```

pub mod candidate;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod selection;
pub mod sort;
pub mod strategy;

pub use candidate::{leading_number, Candidate, Comment};
pub use error::{Result, TalentscopeError};
pub use filter::{Facet, Filter, FilterKind, FilterSet};
pub use pagination::{page_window, paginate, total_pages, Pagination};
pub use selection::Selection;
pub use sort::{sort_candidates, SortOption};
pub use strategy::{CannedResponses, RandomScoring, ResponseStrategy, ScoringStrategy, CHAT_GREETING};
