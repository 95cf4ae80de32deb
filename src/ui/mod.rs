pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{banner, error, header, rule, section, status, success, warn};
pub use table::{render_result, stats_table, violations_table};
pub use theme::{theme, Theme};
