//! 考勤日历 Handler

use axum::Json;
use axum::extract::State;

use shared::client::CalendarEvent;

use crate::core::ServerState;
use crate::db::models::format_employee_id;
use crate::db::repository::AttendanceRepository;
use crate::utils::AppResult;

/// 单次日历查询返回的最大事件数
const CALENDAR_LIMIT: i64 = 1000;

/// GET /api/calendar/events
///
/// 返回裸数组而非统一响应包装, 方便日历控件直接作为事件源使用。
pub async fn events(State(state): State<ServerState>) -> AppResult<Json<Vec<CalendarEvent>>> {
    let records = AttendanceRepository::new(state.pool().clone())
        .list_all(CALENDAR_LIMIT)
        .await?;

    let events = records
        .into_iter()
        .map(|r| CalendarEvent {
            title: format!("{} - {}", format_employee_id(r.employee_no), r.status.as_str()),
            start: r.date.format("%Y-%m-%d").to_string(),
            all_day: true,
        })
        .collect();

    Ok(Json(events))
}
