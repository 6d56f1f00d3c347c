pub mod json_contract;

pub use json_contract::{
    BUCKETS_JSON_SCHEMA_V1, BucketsJsonContractV1, TARGETS_JSON_SCHEMA_V1, TargetsJsonContractV1,
    buckets_from_json_compat_str, filled_sequence_to_json_pretty, targets_from_json_compat_str,
};
