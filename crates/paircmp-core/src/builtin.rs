//! Built-in benchmark measurements.
//!
//! Execution times in milliseconds, five trials per worker count, for one
//! single-machine run and the two sides (master and slave) of a distributed
//! run of the same workload.

use crate::dataset::{Dataset, MeasurementGroup, Series};

/// Default baseline group name.
pub const DEFAULT_BASELINE: &str = "single";

/// Default treatment group name.
pub const DEFAULT_TREATMENT: &str = "distributed";

type Table = [(u64, [f64; 5]); 12];

const SINGLE_MACHINE: Table = [
    (1, [2313.0, 2326.0, 2339.0, 2321.0, 2421.0]),
    (2, [1494.0, 1505.0, 1470.0, 1498.0, 1526.0]),
    (4, [867.0, 860.0, 856.0, 887.0, 862.0]),
    (8, [702.0, 702.0, 709.0, 706.0, 704.0]),
    (16, [681.0, 655.0, 650.0, 632.0, 647.0]),
    (32, [643.0, 631.0, 711.0, 628.0, 644.0]),
    (64, [642.0, 635.0, 640.0, 640.0, 649.0]),
    (128, [623.0, 631.0, 630.0, 621.0, 641.0]),
    (256, [617.0, 620.0, 611.0, 624.0, 613.0]),
    (512, [609.0, 600.0, 606.0, 601.0, 600.0]),
    (1024, [594.0, 602.0, 597.0, 599.0, 591.0]),
    (2048, [600.0, 610.0, 599.0, 599.0, 601.0]),
];

const DISTRIBUTED_MASTER: Table = [
    (1, [2247.0, 2265.0, 2246.0, 2247.0, 2276.0]),
    (2, [2248.0, 2251.0, 2255.0, 2250.0, 2263.0]),
    (4, [2289.0, 2278.0, 2285.0, 2265.0, 2287.0]),
    (8, [2245.0, 2253.0, 2215.0, 2275.0, 2257.0]),
    (16, [2322.0, 2385.0, 2353.0, 2348.0, 2394.0]),
    (32, [2527.0, 2380.0, 2438.0, 2411.0, 2389.0]),
    (64, [2372.0, 2439.0, 2395.0, 2388.0, 2413.0]),
    (128, [2416.0, 2357.0, 2356.0, 2343.0, 2416.0]),
    (256, [2430.0, 2450.0, 2382.0, 2396.0, 2399.0]),
    (512, [2460.0, 2507.0, 2472.0, 2488.0, 2470.0]),
    (1024, [2507.0, 2517.0, 2506.0, 2567.0, 2647.0]),
    (2048, [2540.0, 2541.0, 2567.0, 2521.0, 2550.0]),
];

const DISTRIBUTED_SLAVE: Table = [
    (1, [926.0, 925.0, 925.0, 927.0, 955.0]),
    (2, [943.0, 945.0, 946.0, 942.0, 953.0]),
    (4, [979.0, 983.0, 963.0, 986.0, 986.0]),
    (8, [946.0, 945.0, 910.0, 973.0, 954.0]),
    (16, [1019.0, 1086.0, 1053.0, 1047.0, 1094.0]),
    (32, [1112.0, 1080.0, 1118.0, 1109.0, 1089.0]),
    (64, [1073.0, 1140.0, 1093.0, 1086.0, 1097.0]),
    (128, [1117.0, 1050.0, 1053.0, 1042.0, 1112.0]),
    (256, [1130.0, 1151.0, 1074.0, 1094.0, 1097.0]),
    (512, [1158.0, 1199.0, 1171.0, 1182.0, 1169.0]),
    (1024, [1283.0, 1215.0, 1204.0, 1256.0, 1214.0]),
    (2048, [1236.0, 1234.0, 1261.0, 1210.0, 1237.0]),
];

fn group_from_table(name: &str, label: &str, table: &Table) -> MeasurementGroup {
    let series = table
        .iter()
        .map(|(workers, samples)| Series::new(*workers, samples.to_vec()))
        .collect();
    MeasurementGroup::new(name, label, series).expect("built-in tables are well formed")
}

/// The built-in dataset: `single`, `distributed` and `distributed-slave`.
#[must_use]
pub fn builtin_dataset() -> Dataset {
    Dataset::new(vec![
        group_from_table(DEFAULT_BASELINE, "No Slave", &SINGLE_MACHINE),
        group_from_table(DEFAULT_TREATMENT, "Distributed", &DISTRIBUTED_MASTER),
        group_from_table("distributed-slave", "Distributed Slave", &DISTRIBUTED_SLAVE),
    ])
    .expect("built-in group names are unique")
}
