// tests/count_up.rs
//
// Count-up reveal: driven by explicit ticks, no real time.

use result_card::config::consts::COUNT_UP_STEPS;
use result_card::count_up::CountUp;

fn run_to_end(target: f64) -> Vec<f64> {
    let mut cu = CountUp::new(target);
    let mut seen = Vec::new();
    // bounded: one extra step covers float drift
    for _ in 0..(COUNT_UP_STEPS + 2) {
        seen.push(cu.tick());
        if cu.is_done() { break; }
    }
    assert!(cu.is_done(), "target {target} never finished");
    seen
}

#[test]
fn monotonic_bounded_and_exact() {
    for target in [0.0, 1.0, 7.0, 39.0, 40.0, 90.0, 285.0, 90.5, 1234.56] {
        let seen = run_to_end(target);
        for w in seen.windows(2) {
            assert!(w[0] <= w[1], "target {target}: {} then {}", w[0], w[1]);
        }
        assert!(seen.iter().all(|&v| v <= target), "target {target} overshot");
        assert_eq!(*seen.last().unwrap(), target);
    }
}

#[test]
fn intermediate_values_round_up() {
    let mut cu = CountUp::new(90.0);
    assert_eq!(cu.tick(), 3.0); // 2.25 → 3
    assert_eq!(cu.tick(), 5.0); // 4.5 → 5
    assert_eq!(cu.text(), "5");
}

#[test]
fn takes_about_forty_steps() {
    assert!(run_to_end(90.0).len() <= COUNT_UP_STEPS as usize + 1);
    assert!(run_to_end(90.0).len() >= COUNT_UP_STEPS as usize);
}

#[test]
fn stays_put_once_done() {
    let mut cu = CountUp::new(12.0);
    cu.advance(100);
    assert!(cu.is_done());
    assert_eq!(cu.tick(), 12.0);
    assert_eq!(cu.text(), "12");
}

#[test]
fn zero_target_finishes_on_first_tick() {
    let mut cu = CountUp::new(0.0);
    assert_eq!(cu.shown(), 0.0);
    assert_eq!(cu.tick(), 0.0);
    assert!(cu.is_done());
}
