use pretty_assertions::assert_eq;
use shared_types::{CachePolicy, Freshness};

#[test]
fn default_policy_values() {
    let policy = CachePolicy::default();
    assert_eq!(policy.stale_after_secs, 300);
    assert_eq!(policy.retain_for_secs, 600);
    assert_eq!(policy.max_retries, 1);
    assert!(!policy.refetch_on_focus);
}

#[test]
fn freshness_boundaries_are_half_open() {
    let policy = CachePolicy::default();
    assert_eq!(policy.freshness(0), Freshness::Fresh);
    assert_eq!(policy.freshness(299), Freshness::Fresh);
    // Exactly at the stale threshold the entry is already stale
    assert_eq!(policy.freshness(300), Freshness::Stale);
    assert_eq!(policy.freshness(599), Freshness::Stale);
    // Exactly at retention the entry is gone
    assert_eq!(policy.freshness(600), Freshness::Expired);
    assert_eq!(policy.freshness(u64::MAX), Freshness::Expired);
}

#[test]
fn custom_policy_respects_its_own_windows() {
    let policy = CachePolicy {
        stale_after_secs: 10,
        retain_for_secs: 20,
        max_retries: 0,
        refetch_on_focus: true,
    };
    assert_eq!(policy.freshness(9), Freshness::Fresh);
    assert_eq!(policy.freshness(10), Freshness::Stale);
    assert_eq!(policy.freshness(19), Freshness::Stale);
    assert_eq!(policy.freshness(20), Freshness::Expired);
}
