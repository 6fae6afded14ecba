#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use metrics_app_core::AppMetrics;

#[test]
fn parallel_writers_lose_no_updates() {
    let metrics = Arc::new(AppMetrics::new().expect("registry"));

    let workers: Vec<_> = (0..8)
        .map(|_| {
            let m = Arc::clone(&metrics);
            thread::spawn(move || {
                for _ in 0..250 {
                    m.inc_requests();
                    m.observe_latency(Duration::from_millis(1));
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }

    assert_eq!(metrics.requests_total(), 2000);
    assert_eq!(metrics.latency_count(), 2000);
}

#[test]
fn render_is_read_only() {
    let metrics = AppMetrics::new().expect("registry");
    metrics.inc_requests();

    let first = metrics.render().unwrap();
    let second = metrics.render().unwrap();

    assert_eq!(first, second);
    assert_eq!(metrics.requests_total(), 1);
}
