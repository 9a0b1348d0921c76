//! Static label dictionaries for the two display languages.

use serde::Serialize;

use crate::domain::{HardwareTier, Language, Season};

#[derive(Debug, Serialize)]
pub struct PowerLabels {
    pub rated_power: &'static str,
    pub seasonal_output: &'static str,
    pub after_controller: &'static str,
    pub after_wiring: &'static str,
    pub temp_adjusted: &'static str,
    pub final_available: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PerformanceLabels {
    pub motor_efficiency: &'static str,
    pub mechanical_power: &'static str,
    pub hull_speed: &'static str,
    pub achieved_speed: &'static str,
    pub power_ratio: &'static str,
    pub motor_weight: &'static str,
    pub pump_time: &'static str,
}

#[derive(Debug, Serialize)]
pub struct UnitLabels {
    pub minutes: &'static str,
    pub knots: &'static str,
    pub kmh: &'static str,
    pub kg: &'static str,
    pub undefined: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Labels {
    pub title: &'static str,
    pub winter: &'static str,
    pub summer: &'static str,
    pub budget: &'static str,
    pub premium: &'static str,
    pub power_flow: &'static str,
    pub power: PowerLabels,
    pub performance: &'static str,
    pub performance_metrics: PerformanceLabels,
    pub units: UnitLabels,
    pub components: &'static str,
    pub analysis: &'static str,
    pub constants: &'static str,
    pub conditions: &'static str,
    pub total_cost: &'static str,
    pub panel_area: &'static str,
    pub max_power_draw: &'static str,
    pub propeller_efficiency: &'static str,
}

impl Labels {
    pub fn season(&self, season: Season) -> &'static str {
        match season {
            Season::Winter => self.winter,
            Season::Summer => self.summer,
        }
    }

    pub fn tier(&self, tier: HardwareTier) -> &'static str {
        match tier {
            HardwareTier::Budget => self.budget,
            HardwareTier::Premium => self.premium,
        }
    }
}

/// Dictionary for a language
pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &EN,
        Language::Russian => &RU,
    }
}

static EN: Labels = Labels {
    title: "SUP Power Analysis",
    winter: "Winter",
    summer: "August",
    budget: "Budget",
    premium: "Premium",
    power_flow: "Power Flow",
    power: PowerLabels {
        rated_power: "Rated Panel Power",
        seasonal_output: "Seasonal Output",
        after_controller: "After Controller",
        after_wiring: "After Wiring",
        temp_adjusted: "Temperature Adjusted",
        final_available: "Final Available",
    },
    performance: "Performance",
    performance_metrics: PerformanceLabels {
        motor_efficiency: "Motor Efficiency",
        mechanical_power: "Mechanical Power",
        hull_speed: "Hull Speed Limit",
        achieved_speed: "Achieved Speed",
        power_ratio: "Power Available",
        motor_weight: "Motor Weight",
        pump_time: "Pump Inflation Time",
    },
    units: UnitLabels {
        minutes: "min",
        knots: "knots",
        kmh: "km/h",
        kg: "kg",
        undefined: "n/a",
    },
    components: "Components",
    analysis: "Analysis",
    constants: "Physical Constants",
    conditions: "Conditions",
    total_cost: "Total Cost",
    panel_area: "Panel Area",
    max_power_draw: "Max Power Draw",
    propeller_efficiency: "Propeller Efficiency",
};

static RU: Labels = Labels {
    title: "Анализ мощности САП",
    winter: "Зима",
    summer: "Август",
    budget: "Бюджет",
    premium: "Премиум",
    power_flow: "Поток мощности",
    power: PowerLabels {
        rated_power: "Номинальная мощность",
        seasonal_output: "Сезонная мощность",
        after_controller: "После контроллера",
        after_wiring: "После проводки",
        temp_adjusted: "С учётом температуры",
        final_available: "Итоговая мощность",
    },
    performance: "Производительность",
    performance_metrics: PerformanceLabels {
        motor_efficiency: "КПД мотора",
        mechanical_power: "Механическая мощность",
        hull_speed: "Предельная скорость",
        achieved_speed: "Достижимая скорость",
        power_ratio: "Доступная мощность",
        motor_weight: "Вес мотора",
        pump_time: "Время накачки",
    },
    units: UnitLabels {
        minutes: "мин",
        knots: "узлов",
        kmh: "км/ч",
        kg: "кг",
        undefined: "н/д",
    },
    components: "Компоненты",
    analysis: "Анализ",
    constants: "Физические константы",
    conditions: "Условия",
    total_cost: "Общая стоимость",
    panel_area: "Площадь панелей",
    max_power_draw: "Макс. потребление",
    propeller_efficiency: "КПД винта",
};
