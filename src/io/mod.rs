//! Tabular input and report output
//!
//! - `table`: string-celled dataset with numeric coercion
//! - `load`: CSV reading via the `csv` crate
//! - `save`: report rendering to table, JSON, CSV and Markdown

mod load;
mod save;
mod table;

pub use load::{read_csv, read_table};
pub use save::{render_report, save_report, write_report_csv};
pub use table::{parse_numeric, Table};
