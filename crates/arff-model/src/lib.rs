//! Dataset model shared by every stage of the min-max pipeline.
//!
//! - [`Schema`]: ordered [`Attribute`] declarations with a name lookup
//! - [`Dataset`]: numeric rows bound to a schema, capacity-checked by [`Limits`]
//! - [`MinMaxTable`]: per-column extrema derived from a dataset
//! - [`RangeSpec`]: requested target range for one attribute

mod dataset;
mod error;
mod limits;
mod minmax;
mod range;
mod schema;

pub use dataset::Dataset;
pub use error::{Capacity, ModelError, Result};
pub use limits::{DEFAULT_MAX_COLUMNS, DEFAULT_MAX_ROWS, Limits};
pub use minmax::{ColumnRange, MinMaxTable};
pub use range::RangeSpec;
pub use schema::{Attribute, Schema};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_error_display() {
        let err = ModelError::CapacityExceeded {
            capacity: Capacity::Rows,
            limit: 10_000,
        };
        assert_eq!(err.to_string(), "capacity exceeded: more than 10000 rows");
    }

    #[test]
    fn range_spec_serializes() {
        let spec = RangeSpec::new("a1", 0.0, 1.0);
        let json = serde_json::to_value(&spec).expect("serialize range");
        assert_eq!(json["attribute"], "a1");
        assert_eq!(json["new_max"], 1.0);
    }
}
