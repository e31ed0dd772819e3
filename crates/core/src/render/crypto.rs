use crate::format;
use crate::models::position::CryptoPosition;
use crate::render::fragment::{escape_html, MountPoint};

const DCA_NOTE: &str =
    "Dollar-cost averaging to reduce volatility impact and maximize long-term growth potential";

/// Render one card per crypto position, in input order.
///
/// Crypto cards carry no risk badge; they show the bucket share and
/// the DCA strategy instead.
pub fn render(positions: &[CryptoPosition], mount: &mut dyn MountPoint) {
    mount.clear();

    for crypto in positions {
        let fragment = format!(
            r#"<div class="crypto-card">
    <div class="crypto-header">
        <div>
            <div class="crypto-name">{name} ({symbol})</div>
            <div class="crypto-alloc">{percentage}% of crypto allocation</div>
        </div>
        <div class="stock-amount">{amount}</div>
    </div>
    <div class="detail-item">
        <span class="label">DCA Strategy</span>
        <span class="value">{strategy}</span>
    </div>
    <div class="detail-item">
        <span class="label">Expected Return</span>
        <span class="value">{expected_return}</span>
    </div>
    <div class="rationale">{note}</div>
</div>"#,
            name = escape_html(&crypto.name),
            symbol = escape_html(&crypto.symbol),
            percentage = crypto.percentage,
            amount = format::currency(crypto.amount),
            strategy = escape_html(&crypto.strategy),
            expected_return = escape_html(&crypto.expected_return),
            note = DCA_NOTE,
        );
        mount.append(&fragment);
    }
}
