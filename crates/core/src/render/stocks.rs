use crate::format;
use crate::models::position::StockPosition;
use crate::models::risk::RiskCategory;
use crate::render::fragment::{escape_html, MountPoint};

/// Render one card per stock position, in input order.
///
/// Clears the mount point first, so re-rendering is idempotent.
pub fn render(positions: &[StockPosition], mount: &mut dyn MountPoint) {
    mount.clear();

    for stock in positions {
        let risk = RiskCategory::from_label(&stock.risk);
        let fragment = format!(
            r#"<div class="stock-card">
    <div class="stock-header">
        <div>
            <div class="stock-company">{company}</div>
            <div class="stock-sector">{sector}</div>
        </div>
        <div class="stock-amount">{amount}</div>
    </div>
    <div class="stock-meta">
        <div class="risk-badge {risk_class}">{risk_label} Risk</div>
        <div class="detail-item">
            <span class="label">Expected Return</span>
            <span class="value">{expected_return}</span>
        </div>
    </div>
    <div class="rationale">{rationale}</div>
</div>"#,
            company = escape_html(&stock.company),
            sector = escape_html(&stock.sector),
            amount = format::currency(stock.amount),
            risk_class = risk.css_class(),
            risk_label = escape_html(&stock.risk),
            expected_return = escape_html(&stock.expected_return),
            rationale = escape_html(&stock.rationale),
        );
        mount.append(&fragment);
    }
}
