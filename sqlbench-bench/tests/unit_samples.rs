use sqlbench_bench::samples::SampleCollector;

#[test]
fn test_record_then_snapshot() {
    let collector = SampleCollector::new();
    collector.record(1.5);
    collector.record(2.5);

    assert_eq!(collector.snapshot(), vec![1.5, 2.5]);
    assert_eq!(collector.len(), 2);
    assert!(!collector.is_empty());
}

#[test]
fn test_new_collector_is_empty() {
    let collector = SampleCollector::new();
    assert!(collector.is_empty());
    assert!(collector.snapshot().is_empty());
}

#[test]
fn test_reset_empties_the_collector() {
    let collector = SampleCollector::new();
    collector.record(10.0);
    collector.record(20.0);

    collector.reset();

    assert!(collector.is_empty());
    assert!(collector.snapshot().is_empty());
}

#[test]
fn test_snapshot_is_an_independent_copy() {
    let collector = SampleCollector::new();
    collector.record(1.0);

    let snapshot = collector.snapshot();
    collector.record(2.0);
    collector.reset();

    assert_eq!(snapshot, vec![1.0]);
}

#[test]
fn test_clones_share_the_same_samples() {
    let collector = SampleCollector::new();
    let handle = collector.clone();

    collector.record(7.0);
    handle.record(8.0);

    assert_eq!(collector.snapshot(), vec![7.0, 8.0]);

    handle.reset();
    assert!(collector.is_empty());
}

#[test]
fn test_concurrent_producers_lose_nothing() {
    for producers in [1usize, 4, 16] {
        for per_producer in [1usize, 100] {
            let collector = SampleCollector::new();

            let handles: Vec<_> = (0..producers)
                .map(|p| {
                    let collector = collector.clone();
                    std::thread::spawn(move || {
                        for i in 0..per_producer {
                            collector.record((p * per_producer + i) as f64);
                        }
                    })
                })
                .collect();
            for handle in handles {
                handle.join().unwrap();
            }

            let mut snapshot = collector.snapshot();
            assert_eq!(
                snapshot.len(),
                producers * per_producer,
                "lost or duplicated samples with {producers} producers x {per_producer} records"
            );

            // Every distinct value arrived exactly once.
            snapshot.sort_by(|a, b| a.partial_cmp(b).unwrap());
            let expected: Vec<f64> = (0..producers * per_producer).map(|v| v as f64).collect();
            assert_eq!(snapshot, expected);
        }
    }
}

#[test]
fn test_reset_during_concurrent_recording_yields_consistent_state() {
    let collector = SampleCollector::new();

    let writer = {
        let collector = collector.clone();
        std::thread::spawn(move || {
            for i in 0..1_000 {
                collector.record(i as f64);
            }
        })
    };

    // Interleave resets with the writer; each snapshot must be a consistent
    // copy, never a torn read.
    for _ in 0..50 {
        collector.reset();
        let snapshot = collector.snapshot();
        assert!(snapshot.len() <= 1_000);
    }

    writer.join().unwrap();
    collector.reset();
    assert!(collector.snapshot().is_empty());
}
