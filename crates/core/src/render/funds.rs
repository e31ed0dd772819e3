use crate::format;
use crate::models::position::FundPosition;
use crate::models::risk::RiskCategory;
use crate::render::fragment::{escape_html, MountPoint};

const FUND_NOTE: &str =
    "Professional management with diversified portfolio across market segments";

/// Render one card per mutual fund, in input order.
pub fn render(funds: &[FundPosition], mount: &mut dyn MountPoint) {
    mount.clear();

    for fund in funds {
        let risk = RiskCategory::from_label(&fund.risk);
        let fragment = format!(
            r#"<div class="fund-card">
    <div class="fund-header">
        <div class="fund-name">{name}</div>
        <div class="risk-badge {risk_class}">{risk_label} Risk</div>
    </div>
    <div class="fund-amounts">
        <div class="detail-item">
            <span class="label">Total Allocation</span>
            <span class="value">{amount}</span>
        </div>
        <div class="detail-item">
            <span class="label">Monthly SIP</span>
            <span class="value">{monthly}</span>
        </div>
    </div>
    <div class="detail-item">
        <span class="label">Expected Return</span>
        <span class="value">{expected_return}</span>
    </div>
    <div class="fund-note">{note}</div>
</div>"#,
            name = escape_html(&fund.name),
            risk_class = risk.css_class(),
            risk_label = escape_html(&fund.risk),
            amount = format::currency(fund.amount),
            monthly = format::currency(fund.monthly_contribution),
            expected_return = escape_html(&fund.expected_return),
            note = FUND_NOTE,
        );
        mount.append(&fragment);
    }
}
