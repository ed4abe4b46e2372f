use dioxus::prelude::*;

#[cfg(feature = "server")]
use crate::db::get_db;

#[cfg(feature = "server")]
use crate::error_convert::{AppErrorExt, SqlxErrorExt};

#[cfg(feature = "server")]
use super::auth::require_role;

// ── Dashboard Server Functions ─────────────────────────────
//
// Each returns its payload as a JSON string so the client-side query cache
// can store and age entries uniformly. Every function re-checks the caller's
// role — the route guards on the client are cosmetic, this is the boundary.

#[cfg(feature = "server")]
fn to_json<T: serde::Serialize>(payload: &T) -> Result<String, ServerFnError> {
    serde_json::to_string(payload)
        .map_err(|e| shared_types::AppError::internal(e.to_string()).into_server_fn_error())
}

/// Children and outstanding balance for the calling guardian.
#[server]
pub async fn parent_summary() -> Result<String, ServerFnError> {
    use shared_types::{ChildSummary, ParentSummary, UserRole};
    use sqlx::Row;

    let claims = require_role(UserRole::Parent)?;
    let db = get_db().await;

    let rows = sqlx::query(
        "SELECT id, name, class_name, attendance_rate
         FROM students WHERE guardian_id = $1 ORDER BY name",
    )
    .bind(claims.sub)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let children = rows
        .iter()
        .map(|row| {
            Ok(ChildSummary {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                class_name: row.try_get("class_name")?,
                attendance_rate: row.try_get("attendance_rate")?,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let outstanding: Option<i64> = sqlx::query_scalar(
        "SELECT SUM(amount_cents) FROM invoices WHERE guardian_id = $1 AND status <> 'paid'",
    )
    .bind(claims.sub)
    .fetch_one(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    to_json(&ParentSummary {
        children,
        outstanding_balance_cents: outstanding.unwrap_or(0),
    })
}

/// Class roster and grading backlog for the calling teacher.
#[server]
pub async fn teacher_summary() -> Result<String, ServerFnError> {
    use shared_types::{ClassSummary, TeacherSummary, UserRole};
    use sqlx::Row;

    let claims = require_role(UserRole::Teacher)?;
    let db = get_db().await;

    let rows = sqlx::query(
        "SELECT id, name, student_count, pending_grades
         FROM teacher_classes WHERE teacher_id = $1 ORDER BY name",
    )
    .bind(claims.sub)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let classes = rows
        .iter()
        .map(|row| {
            Ok(ClassSummary {
                id: row.try_get("id")?,
                name: row.try_get("name")?,
                student_count: row.try_get("student_count")?,
                pending_grades: row.try_get("pending_grades")?,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let pending_grades_total = classes.iter().map(|c| c.pending_grades).sum();

    to_json(&TeacherSummary {
        classes,
        pending_grades_total,
    })
}

/// School-wide headcounts for administrators.
#[server]
pub async fn admin_stats() -> Result<String, ServerFnError> {
    use shared_types::{AdminStats, UserRole};

    require_role(UserRole::Admin)?;
    let db = get_db().await;

    let total_students: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
        .fetch_one(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let total_teachers: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE role = 'teacher'")
            .fetch_one(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let total_guardians: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM profiles WHERE role = 'parent'")
            .fetch_one(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let active_routes: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bus_routes")
        .fetch_one(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    to_json(&AdminStats {
        total_students,
        total_teachers,
        total_guardians,
        active_routes,
    })
}

/// Billing overview for finance staff.
#[server]
pub async fn finance_summary() -> Result<String, ServerFnError> {
    use shared_types::{FinanceSummary, InvoiceSummary, UserRole};
    use sqlx::Row;

    require_role(UserRole::Staff)?;
    let db = get_db().await;

    let invoices_due: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM invoices WHERE status IN ('due', 'overdue')")
            .fetch_one(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let collected: Option<i64> =
        sqlx::query_scalar("SELECT SUM(amount_cents) FROM invoices WHERE status = 'paid'")
            .fetch_one(db)
            .await
            .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let rows = sqlx::query(
        "SELECT i.id, u.display_name AS guardian_name, i.description,
                i.amount_cents, i.due_date::TEXT AS due_date, i.status
         FROM invoices i
         JOIN users u ON u.id = i.guardian_id
         WHERE i.status = 'overdue'
         ORDER BY i.due_date
         LIMIT 20",
    )
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let overdue = rows
        .iter()
        .map(|row| {
            Ok(InvoiceSummary {
                id: row.try_get("id")?,
                guardian_name: row.try_get("guardian_name")?,
                description: row.try_get("description")?,
                amount_cents: row.try_get("amount_cents")?,
                due_date: row.try_get("due_date")?,
                status: row.try_get("status")?,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    to_json(&FinanceSummary {
        invoices_due,
        collected_cents: collected.unwrap_or(0),
        overdue,
    })
}

/// Today's route and stops for the calling driver. A driver with no route
/// assigned gets an empty payload rather than an error.
#[server]
pub async fn driver_route() -> Result<String, ServerFnError> {
    use shared_types::{DriverRoute, RouteStop, UserRole};
    use sqlx::Row;

    let claims = require_role(UserRole::Driver)?;
    let db = get_db().await;

    let route = sqlx::query("SELECT id, name FROM bus_routes WHERE driver_id = $1 LIMIT 1")
        .bind(claims.sub)
        .fetch_optional(db)
        .await
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let Some(route) = route else {
        return to_json(&DriverRoute::default());
    };

    let route_id: i64 = route
        .try_get("id")
        .map_err(|e| e.into_app_error().into_server_fn_error())?;
    let route_name: String = route
        .try_get("name")
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let rows = sqlx::query(
        "SELECT seq, name, student_count FROM bus_stops WHERE route_id = $1 ORDER BY seq",
    )
    .bind(route_id)
    .fetch_all(db)
    .await
    .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let stops = rows
        .iter()
        .map(|row| {
            Ok(RouteStop {
                seq: row.try_get("seq")?,
                name: row.try_get("name")?,
                student_count: row.try_get("student_count")?,
            })
        })
        .collect::<Result<Vec<_>, sqlx::Error>>()
        .map_err(|e| e.into_app_error().into_server_fn_error())?;

    let students_assigned = stops.iter().map(|s| s.student_count).sum();

    to_json(&DriverRoute {
        route_name: Some(route_name),
        stops,
        students_assigned,
    })
}
