use sr_core::SHARD_COUNT;

/// File stem of a record: `{family}-{shard}-of-{SHARD_COUNT:05}`.
///
/// The family is the scenario name up to its first `_`, so
/// `"BikePassingby_1"` and `"BikePassingby_2"` share `"BikePassingby"`.
pub fn record_file_stem(scenario_name: &str, shard_id: &str) -> String {
    let family = scenario_family(scenario_name);
    format!("{family}-{shard_id}-of-{SHARD_COUNT:05}")
}

pub fn scenario_family(scenario_name: &str) -> &str {
    scenario_name.split('_').next().unwrap_or(scenario_name)
}
