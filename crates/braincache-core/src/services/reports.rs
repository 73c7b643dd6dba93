//! Abuse report services.

use crate::AppCore;
use crate::error::{CoreError, Result};
use crate::storage::now_ms;
use braincache_models::{Report, ReportStatus, User};
use tracing::info;

pub async fn file(
    core: &AppCore,
    reporter: &User,
    content_id: &str,
    reason: &str,
) -> Result<Report> {
    if reason.trim().is_empty() {
        return Err(CoreError::Validation(
            "report reason must not be empty".to_string(),
        ));
    }

    let Some(item) = core.storage.contents.get(content_id)? else {
        return Err(CoreError::NotFound("content"));
    };
    if item.owner_id == reporter.id {
        return Err(CoreError::Conflict(
            "cannot report your own content".to_string(),
        ));
    }

    let now = now_ms();
    let report = Report {
        id: uuid::Uuid::new_v4().to_string(),
        content_id: content_id.to_string(),
        reporter_id: reporter.id.clone(),
        reason: reason.trim().to_string(),
        status: ReportStatus::Pending,
        created_at: now,
        updated_at: now,
    };
    core.storage.reports.put(&report)?;

    info!(report_id = %report.id, content_id, "filed report");
    Ok(report)
}

/// Reports the caller may see: everything for admins, otherwise reports
/// against content the caller owns.
pub async fn list_visible(core: &AppCore, caller: &User) -> Result<Vec<Report>> {
    let all = core.storage.reports.list_all()?;
    if caller.is_admin() {
        return Ok(all);
    }

    let mut visible = Vec::new();
    for report in all {
        let owns_content = core
            .storage
            .contents
            .get(&report.content_id)?
            .is_some_and(|item| item.owner_id == caller.id);
        if owns_content {
            visible.push(report);
        }
    }
    Ok(visible)
}

/// Transition a report's status. Admins always may; otherwise only the
/// owner of the reported content.
pub async fn set_status(
    core: &AppCore,
    caller: &User,
    report_id: &str,
    status: ReportStatus,
) -> Result<Report> {
    let Some(mut report) = core.storage.reports.get(report_id)? else {
        return Err(CoreError::NotFound("report"));
    };

    let allowed = caller.is_admin()
        || core
            .storage
            .contents
            .get(&report.content_id)?
            .is_some_and(|item| item.owner_id == caller.id);
    if !allowed {
        return Err(CoreError::Forbidden);
    }

    report.status = status;
    report.updated_at = now_ms();
    core.storage.reports.put(&report)?;
    Ok(report)
}
