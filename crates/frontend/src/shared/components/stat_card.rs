use crate::shared::icons::icon;
use crate::shared::number_format::{format_int, format_money, format_with_decimals};
use contracts::shared::ValueFormat;
use leptos::prelude::*;

/// Formats a stat value for display. Money values at one million or
/// above collapse to an "M" suffix.
pub(crate) fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => {
            let formatted = if val.abs() >= 1_000_000.0 {
                format!("{:.1}M", val / 1_000_000.0)
            } else {
                format_money(val)
            };
            format!("{formatted} {currency}")
        }
        ValueFormat::Number { decimals } => format_with_decimals(val, *decimals as usize),
        ValueFormat::Percent { decimals } => {
            format!("{:.prec$}%", val, prec = *decimals as usize)
        }
        ValueFormat::Integer => format_int(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: &'static str,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// Primary numeric value
    value: f64,
    /// How to format the value
    format: ValueFormat,
    /// Change % relative to the previous period
    #[prop(optional)]
    change_percent: Option<f64>,
    /// Optional subtitle below the value
    #[prop(optional, into)]
    subtitle: Option<String>,
) -> impl IntoView {
    let formatted = format_value(value, &format);

    let change_view = change_percent.map(|pct| {
        let (arrow, cls) = if pct > 0.5 {
            ("\u{2191}", "stat-card__change stat-card__change--up")
        } else if pct < -0.5 {
            ("\u{2193}", "stat-card__change stat-card__change--down")
        } else {
            ("", "stat-card__change stat-card__change--flat")
        };
        let text = format!("{}{:.1}%", arrow, pct.abs());
        view! { <span class=cls>{text}</span> }
    });

    let subtitle_view = subtitle.map(|s| {
        view! { <div class="stat-card__subtitle">{s}</div> }
    });

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_value;
    use contracts::shared::ValueFormat;

    #[test]
    fn money_collapses_to_millions() {
        assert_eq!(format_value(8_394_400.0, &ValueFormat::usd()), "8.4M USD");
        assert_eq!(format_value(6_056_000.0, &ValueFormat::usd()), "6.1M USD");
    }

    #[test]
    fn small_money_keeps_cents() {
        assert_eq!(format_value(89.99, &ValueFormat::usd()), "89.99 USD");
        assert_eq!(format_value(1_840.5, &ValueFormat::usd()), "1 840.50 USD");
    }

    #[test]
    fn integer_groups_thousands() {
        assert_eq!(format_value(55_900.0, &ValueFormat::Integer), "55 900");
    }

    #[test]
    fn percent_respects_decimals() {
        assert_eq!(
            format_value(37.2, &ValueFormat::Percent { decimals: 1 }),
            "37.2%"
        );
        assert_eq!(
            format_value(37.25, &ValueFormat::Percent { decimals: 0 }),
            "37%"
        );
    }
}
