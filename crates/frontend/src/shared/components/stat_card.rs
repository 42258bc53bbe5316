use contracts::dashboards::d100_resource_summary::DashboardTile;
use leptos::prelude::*;

/// Visual tone for a tile, picked from words in its key.
fn tone(key: &str) -> &'static str {
    const BAD: [&str; 4] = ["overdue", "expired", "low_stock", "disposed"];
    const WARN: [&str; 4] = ["expiring", "maintenance", "critical", "pending"];
    if BAD.iter().any(|w| key.contains(w)) {
        "stat-card stat-card--error"
    } else if WARN.iter().any(|w| key.contains(w)) {
        "stat-card stat-card--warning"
    } else if key.starts_with("total") {
        "stat-card stat-card--primary"
    } else {
        "stat-card"
    }
}

#[component]
pub fn StatCard(tile: DashboardTile) -> impl IntoView {
    view! {
        <div class=tone(&tile.key)>
            <div class="stat-card__content">
                <div class="stat-card__label">{tile.label.clone()}</div>
                <div class="stat-card__value">{tile.display_value()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone() {
        assert_eq!(tone("overdue"), "stat-card stat-card--error");
        assert_eq!(tone("expiring_soon"), "stat-card stat-card--warning");
        assert_eq!(tone("total_assets"), "stat-card stat-card--primary");
        assert_eq!(tone("assigned"), "stat-card");
    }
}
