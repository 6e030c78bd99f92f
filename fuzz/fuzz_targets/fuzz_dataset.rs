#![no_main]

use libfuzzer_sys::fuzz_target;
use paircmp_core::{Dataset, PairedComparator, TestDesign};

// Arbitrary JSON must either fail to parse or yield groups that compare
// without panicking, with p-values inside [0, 1].
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(dataset) = Dataset::from_json_str(text) else {
        return;
    };
    let groups = dataset.groups();
    for design in [TestDesign::GroupMeans, TestDesign::RawSamples] {
        let comparator = PairedComparator::new(0.05, design).unwrap();
        for baseline in groups {
            for treatment in groups {
                if let Ok(cmp) = comparator.compare(baseline, treatment) {
                    assert!((0.0..=1.0).contains(&cmp.test.p_value));
                    assert_eq!(cmp.differences.len(), cmp.workers.len());
                }
            }
        }
    }
});
