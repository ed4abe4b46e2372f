use pretty_assertions::assert_eq;
use shared_types::{portal_access, PortalAccess, UserRole};

const ALL_ROLES: [UserRole; 5] = [
    UserRole::Parent,
    UserRole::Teacher,
    UserRole::Admin,
    UserRole::Staff,
    UserRole::Driver,
];

#[test]
fn each_portal_admits_exactly_its_own_role() {
    for required in ALL_ROLES {
        for role in ALL_ROLES {
            let expected = if role == required {
                PortalAccess::Granted
            } else {
                PortalAccess::RedirectHome
            };
            assert_eq!(portal_access(&role, &required), expected);
        }
    }
}

#[test]
fn admins_get_no_pass_into_other_portals() {
    assert_eq!(
        portal_access(&UserRole::Admin, &UserRole::Teacher),
        PortalAccess::RedirectHome
    );
    assert_eq!(
        portal_access(&UserRole::Admin, &UserRole::Staff),
        PortalAccess::RedirectHome
    );
    assert_eq!(
        portal_access(&UserRole::Admin, &UserRole::Admin),
        PortalAccess::Granted
    );
}
