//! Display formatting for terminal output

pub mod category;
pub mod chart;
pub mod transaction;

pub use category::{format_budget_list, format_category_list};
pub use chart::{format_bar, format_category_chart, format_monthly_chart, separator, truncate};
pub use transaction::{format_transaction_details, format_transaction_list, format_transaction_row};
