pub mod status_label;
pub mod trust_policy;

pub use status_label::{LabelColor, StatusLabel, StatusLabels};
pub use trust_policy::{TrustPolicy, TrustSource};
