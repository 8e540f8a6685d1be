pub mod attempt_label;
pub mod gav_list_parser;
pub mod scm_link;
pub mod status_chart;

pub use attempt_label::AttemptLabel;
pub use gav_list_parser::parse_gav_list;
pub use scm_link::ScmLinks;
pub use status_chart::{ChartSlice, StatusChart};
