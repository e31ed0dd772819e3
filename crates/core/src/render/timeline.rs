use crate::format;
use crate::models::timeline::TimelineMonth;
use crate::render::fragment::{escape_html, MountPoint};

/// Cumulative funding progress as a percentage of total capital.
///
/// Defined as 0 when total capital is 0, never NaN or infinity.
#[must_use]
pub fn progress(cumulative: f64, total_capital: f64) -> f64 {
    if total_capital == 0.0 {
        0.0
    } else {
        cumulative / total_capital * 100.0
    }
}

/// Render one card per timeline month, in input order.
///
/// Carries a running total across the months: each card shows the
/// month's own amount plus the cumulative amount and its share of
/// total capital (also used as the progress-bar width). This is the
/// only cross-entity derived state in the dashboard.
pub fn render(months: &[TimelineMonth], total_capital: f64, mount: &mut dyn MountPoint) {
    mount.clear();

    let mut cumulative = 0.0;

    for month in months {
        cumulative += month.amount;
        let pct = format::percent(progress(cumulative, total_capital));

        let actions: String = month
            .actions
            .iter()
            .map(|action| format!("<li>{}</li>", escape_html(action)))
            .collect();

        let fragment = format!(
            r#"<div class="timeline-card">
    <div class="timeline-header">
        <h3>Month {month_index}</h3>
        <div class="timeline-amount">{amount}</div>
    </div>
    <div class="progress-track">
        <div class="progress-bar" style="width: {pct}"></div>
    </div>
    <div class="detail-item">
        <span class="label">Cumulative Investment</span>
        <span class="value">{cumulative} ({pct})</span>
    </div>
    <h4>Action Items:</h4>
    <ul class="action-list">{actions}</ul>
</div>"#,
            month_index = month.month,
            amount = format::currency(month.amount),
            cumulative = format::currency(cumulative),
        );
        mount.append(&fragment);
    }
}
