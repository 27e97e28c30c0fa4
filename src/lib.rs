//! Turn a seller's sales CSV export into dashboard series.
//!
//! ```rust,ignore
//! use sales_dashboard::{Dashboard, DashboardQuery, ParserBuilder};
//!
//! let records = ParserBuilder::new()
//!     .content(&file_content)
//!     .parse()?;
//!
//! let view = Dashboard::build(&records, &DashboardQuery::default());
//! ```

mod builder;
mod types;

pub mod dashboard;
pub mod errors;
pub mod parsers;

pub use builder::ParserBuilder;
pub use dashboard::{Dashboard, DashboardQuery, DashboardView};
pub use parsers::prelude::*;
pub use types::{RETURN_MARKERS, SALE, SalesRecord};
