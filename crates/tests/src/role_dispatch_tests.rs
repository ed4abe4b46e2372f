use pretty_assertions::assert_eq;
use shared_types::{DashboardView, UserRole};

#[test]
fn every_role_maps_to_its_dashboard() {
    assert_eq!(
        DashboardView::for_role(&UserRole::Parent),
        DashboardView::Parent
    );
    assert_eq!(
        DashboardView::for_role(&UserRole::Teacher),
        DashboardView::Teacher
    );
    assert_eq!(
        DashboardView::for_role(&UserRole::Admin),
        DashboardView::Admin
    );
    assert_eq!(
        DashboardView::for_role(&UserRole::Staff),
        DashboardView::Finance
    );
    assert_eq!(
        DashboardView::for_role(&UserRole::Driver),
        DashboardView::Driver
    );
}

#[test]
fn unknown_role_strings_collapse_to_parent() {
    assert_eq!(UserRole::from_str_or_default("principal"), UserRole::Parent);
    assert_eq!(UserRole::from_str_or_default(""), UserRole::Parent);
    assert_eq!(UserRole::from_str_or_default("PARENT"), UserRole::Parent);
}

#[test]
fn known_role_strings_parse_case_insensitively() {
    assert_eq!(UserRole::from_str_or_default("Teacher"), UserRole::Teacher);
    assert_eq!(UserRole::from_str_or_default("ADMIN"), UserRole::Admin);
    assert_eq!(UserRole::from_str_or_default("staff"), UserRole::Staff);
    assert_eq!(UserRole::from_str_or_default("driver"), UserRole::Driver);
}

#[test]
fn role_strings_round_trip() {
    for role in [
        UserRole::Parent,
        UserRole::Teacher,
        UserRole::Admin,
        UserRole::Staff,
        UserRole::Driver,
    ] {
        assert_eq!(UserRole::from_str_or_default(role.as_str()), role);
    }
}
