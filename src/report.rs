//! Presentation layer: turns evaluations into text or JSON.
//!
//! All rounding happens here; the model hands over raw values.

use serde::Deserialize;

use crate::domain::{ComponentBundle, PhysicalConstants, SolarCondition};
use crate::error::Result;
use crate::i18n::labels;
use crate::power_model::{Evaluation, InflationTime};

/// Output format of the binary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Render one evaluation as a labelled text report in its selection's language
pub fn render_text(evaluation: &Evaluation, constants: &PhysicalConstants) -> String {
    let selection = evaluation.selection;
    let l = labels(selection.language);
    let r = &evaluation.result;
    let s = &r.stages;
    let p = &l.performance_metrics;
    let bundle = ComponentBundle::for_tier(selection.tier);
    let conditions = SolarCondition::for_season(selection.season);

    // Header: title and the three toggles. The language toggle shows the other language.
    let mut lines = vec![
        format!(
            "{}  [{}] [{}] [{}]",
            l.title,
            selection.language.toggled().code(),
            l.season(selection.season),
            l.tier(selection.tier)
        ),
        String::new(),
        l.power_flow.to_string(),
    ];

    lines.extend(
        [
            (l.power.rated_power, s.rated_w),
            (l.power.seasonal_output, s.seasonal_w),
            (l.power.after_controller, s.after_controller_w),
            (l.power.after_wiring, s.after_wiring_w),
            (l.power.temp_adjusted, s.temp_adjusted_w),
            (l.power.final_available, s.final_w),
        ]
        .iter()
        .map(|(label, value)| format!("  {}: {:.1}W", label, value)),
    );

    lines.extend([
        String::new(),
        l.performance.to_string(),
        format!("  {}: {:.1}%", p.motor_efficiency, r.motor_efficiency_pct),
        format!("  {}: {:.1}W", p.mechanical_power, r.mechanical_power_w),
        format!("  {}: {:.1}%", p.power_ratio, r.power_ratio_pct),
        format!("  {}: {:.1} {}", p.hull_speed, r.hull_speed_knots, l.units.knots),
        format!(
            "  {}: {:.2} {} ({:.2} {})",
            p.achieved_speed,
            r.achieved_speed_knots,
            l.units.knots,
            r.achieved_speed_kmh(),
            l.units.kmh
        ),
        format!("  {}: {} {}", p.motor_weight, r.motor_weight_kg, l.units.kg),
        format!(
            "  {}: {}",
            p.pump_time,
            format_inflation(r.inflation_time, l.units.minutes, l.units.undefined)
        ),
        String::new(),
        format!("{} ({})", l.components, l.tier(selection.tier)),
    ]);

    lines.extend(
        bundle
            .items()
            .iter()
            .map(|item| format!("  {} - ${}", item.name.get(selection.language), item.price_usd)),
    );

    lines.extend([
        format!("  {}: ${}", l.total_cost, evaluation.total_cost_usd),
        String::new(),
        l.constants.to_string(),
        format!("  SUP: {}', {}kg", constants.sup_length_ft, constants.total_mass_kg),
        format!("  {}: {:.2} m²", l.panel_area, r.panel_area_m2),
        format!("  {}: {}W", l.max_power_draw, constants.full_power_consumption_w),
        format!("  {}: {:.0}%", l.propeller_efficiency, r.propeller_efficiency * 100.0),
        String::new(),
        l.conditions.to_string(),
        format!("  {}", conditions.description.get(selection.language)),
    ]);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Serialize evaluations as pretty JSON with raw, unrounded numbers
pub fn render_json(evaluations: &[Evaluation]) -> Result<String> {
    Ok(serde_json::to_string_pretty(evaluations)?)
}

fn format_inflation(time: InflationTime, unit: &str, undefined: &str) -> String {
    match time {
        InflationTime::Minutes(minutes) => format!("{:.1} {}", minutes, unit),
        InflationTime::Undefined => undefined.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HardwareTier, Language, Season, Selection};
    use crate::power_model::PowerModel;

    fn report(selection: Selection) -> String {
        let model = PowerModel::default();
        render_text(&model.evaluate(&selection), model.constants())
    }

    #[test]
    fn test_english_budget_winter_report() {
        let text = report(Selection::new(HardwareTier::Budget, Season::Winter, Language::English));

        assert!(text.starts_with("SUP Power Analysis  [RU] [Winter] [Budget]"));
        assert!(text.contains("Rated Panel Power: 150.0W"));
        assert!(text.contains("Final Available: 59.3W"));
        assert!(text.contains("Motor Efficiency: 60.0%"));
        assert!(text.contains("Mechanical Power: 19.6W"));
        assert!(text.contains("Power Available: 4.4%"));
        assert!(text.contains("Hull Speed Limit: 4.6 knots"));
        assert!(text.contains("Achieved Speed: 1.00 knots (1.84 km/h)"));
        assert!(text.contains("Motor Weight: 2.5 kg"));
        assert!(text.contains("Pump Inflation Time: 6.3 min"));
        assert!(text.contains("ECO-WORTHY 150W - $180"));
        assert!(text.contains("Basic Marine Kit - $30"));
        assert!(text.contains("Total Cost: $740"));
        assert!(text.contains("Panel Area: 1.20 m²"));
        assert!(text.contains("Propeller Efficiency: 55%"));
        assert!(text.contains("~4.5 peak sun hours"));
    }

    #[test]
    fn test_default_report_is_russian_with_english_toggle() {
        let text = report(Selection::default());

        assert!(text.starts_with("Анализ мощности САП  [EN] [Зима] [Бюджет]"));
        assert!(text.contains("Базовый морской комплект - $30"));
        assert!(text.contains("Время накачки: 6.3 мин"));
        assert!(text.ends_with("~4.5 пиковых солнечных часов\n"));
    }

    #[test]
    fn test_report_sections_are_blank_line_separated() {
        let text = report(Selection::default());
        let blank_lines = text.lines().filter(|line| line.is_empty()).count();
        // between header, power flow, performance, components, constants and conditions
        assert_eq!(blank_lines, 5);
    }

    #[test]
    fn test_russian_premium_summer_report() {
        let text = report(Selection::new(HardwareTier::Premium, Season::Summer, Language::Russian));

        assert!(text.starts_with("Анализ мощности САП  [EN] [Август] [Премиум]"));
        assert!(text.contains("Номинальная мощность: 220.0W"));
        assert!(text.contains("После проводки: 182.5W"));
        assert!(text.contains("Итоговая мощность: 131.4W"));
        assert!(text.contains("Премиум морской комплект - $60"));
        assert!(text.contains("Общая стоимость: $1720"));
        assert!(text.contains("Площадь панелей: 1.34 m²"));
        assert!(text.contains("КПД винта: 70%"));
        assert!(text.contains("~6.5 пиковых солнечных часов"));
    }

    #[test]
    fn test_undefined_inflation_formatting() {
        assert_eq!(format_inflation(InflationTime::Undefined, "min", "n/a"), "n/a");
        assert_eq!(format_inflation(InflationTime::Minutes(6.321), "min", "n/a"), "6.3 min");
    }

    #[test]
    fn test_json_keeps_raw_values() {
        let model = PowerModel::default();
        let json = render_json(&[model.evaluate(&Selection::default())]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let first = &value[0];
        assert_eq!(first["selection"]["tier"], "budget");
        assert_eq!(first["total_cost_usd"], 740);
        let final_w = first["result"]["final_w"].as_f64().unwrap();
        assert!((final_w - 59.322375).abs() < 1e-9);
    }
}
