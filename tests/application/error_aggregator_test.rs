use std::sync::Arc;

use ausis_batch::application::services::ErrorAggregator;

#[test]
fn given_new_aggregator_when_read_then_count_is_zero() {
    assert_eq!(ErrorAggregator::new().read(), 0);
}

#[test]
fn given_increments_when_read_then_each_returns_running_total() {
    let errors = ErrorAggregator::new();

    assert_eq!(errors.increment(), 1);
    assert_eq!(errors.increment(), 2);
    assert_eq!(errors.read(), 2);
}

#[test]
fn given_concurrent_increments_from_many_threads_when_joined_then_none_are_lost() {
    let errors = Arc::new(ErrorAggregator::new());

    let threads: Vec<_> = (0..8)
        .map(|_| {
            let errors = Arc::clone(&errors);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    errors.increment();
                }
            })
        })
        .collect();
    for t in threads {
        t.join().unwrap();
    }

    assert_eq!(errors.read(), 8000);
}
