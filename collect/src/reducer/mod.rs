//! Reducer factories.
//!
//! Every factory returns a fresh [crate::fold::Reducer] to pass to
//! [crate::fold::Fold::fold_with] along with the matching seed.

pub mod collect;
pub mod merge;
pub mod numeric;
pub mod partition;
pub mod zip;

pub use collect::{
    group_by, group_by_with, to_map, to_map_with, to_object, to_object_merged, to_object_with,
};
pub use merge::{
    merge_when, to_merged_object, Absent, MergeStrategy, Mergeable, CHECKED, OVERRIDE, UNIQUE,
};
pub use numeric::{flat, max, min, sum, Summable};
pub use partition::{
    partition_by, partition_by_key, partition_by_match, partitions, PartitionBy,
};
pub use zip::{unzip, zip, zip_all, zip_all_with_config, zip_with};
