use serde::Serialize;

/// Target range for one attribute, as requested on the command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSpec {
    pub attribute: String,
    pub new_min: f64,
    pub new_max: f64,
}

impl RangeSpec {
    pub fn new(attribute: impl Into<String>, new_min: f64, new_max: f64) -> Self {
        Self {
            attribute: attribute.into(),
            new_min,
            new_max,
        }
    }
}
