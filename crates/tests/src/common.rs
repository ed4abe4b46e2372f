/// Set a deterministic JWT secret for token tests. Safe to call repeatedly.
pub fn set_test_secret() {
    std::env::set_var("JWT_SECRET", "classbridge-test-secret");
}
