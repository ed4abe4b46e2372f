//! Typed payloads for the five role dashboards. Server functions return
//! these serialized as JSON strings so the client cache can hold them
//! uniformly; pages deserialize on read.

use serde::{Deserialize, Serialize};

/// One student as seen by their guardian.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChildSummary {
    pub id: i64,
    pub name: String,
    pub class_name: String,
    /// 0.0..=1.0 fraction of school days attended this term.
    pub attendance_rate: f64,
}

/// Parent dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ParentSummary {
    #[serde(default)]
    pub children: Vec<ChildSummary>,
    #[serde(default)]
    pub outstanding_balance_cents: i64,
}

/// One class as seen by its teacher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
    pub student_count: i64,
    pub pending_grades: i64,
}

/// Teacher dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeacherSummary {
    #[serde(default)]
    pub classes: Vec<ClassSummary>,
    #[serde(default)]
    pub pending_grades_total: i64,
}

/// Admin dashboard payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdminStats {
    #[serde(default)]
    pub total_students: i64,
    #[serde(default)]
    pub total_teachers: i64,
    #[serde(default)]
    pub total_guardians: i64,
    #[serde(default)]
    pub active_routes: i64,
}

/// One unpaid invoice in the finance portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceSummary {
    pub id: i64,
    pub guardian_name: String,
    pub description: String,
    pub amount_cents: i64,
    pub due_date: String,
    pub status: String,
}

/// Finance portal payload (staff role).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FinanceSummary {
    #[serde(default)]
    pub invoices_due: i64,
    #[serde(default)]
    pub collected_cents: i64,
    #[serde(default)]
    pub overdue: Vec<InvoiceSummary>,
}

/// One stop on a bus route, in pickup order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RouteStop {
    pub seq: i64,
    pub name: String,
    pub student_count: i64,
}

/// Driver portal payload. `route` is None when no route is assigned yet.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DriverRoute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_name: Option<String>,
    #[serde(default)]
    pub stops: Vec<RouteStop>,
    #[serde(default)]
    pub students_assigned: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_summary_roundtrip() {
        let summary = ParentSummary {
            children: vec![ChildSummary {
                id: 3,
                name: "Tunde A.".into(),
                class_name: "Primary 4B".into(),
                attendance_rate: 0.96,
            }],
            outstanding_balance_cents: 125_000,
        };
        let json = serde_json::to_string(&summary).unwrap();
        let parsed: ParentSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, parsed);
    }

    #[test]
    fn driver_route_tolerates_empty_payload() {
        let route: DriverRoute = serde_json::from_str("{}").unwrap();
        assert!(route.route_name.is_none());
        assert!(route.stops.is_empty());
        assert_eq!(route.students_assigned, 0);
    }

    #[test]
    fn finance_summary_defaults() {
        let summary: FinanceSummary = serde_json::from_str("{}").unwrap();
        assert_eq!(summary, FinanceSummary::default());
    }
}
