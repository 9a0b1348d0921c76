use serde::Serialize;
use strum_macros::{Display, EnumIter};

use super::selection::{HardwareTier, Language};

/// Text carried in both display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub english: &'static str,
    pub russian: &'static str,
}

impl LocalizedText {
    /// Same text in both languages (product names)
    pub const fn same(text: &'static str) -> Self {
        Self {
            english: text,
            russian: text,
        }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Russian => self.russian,
        }
    }
}

/// Slot a component occupies in a bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ComponentKind {
    Panel,
    Controller,
    Motor,
    Pump,
    Wiring,
}

/// Solar panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Panel {
    pub name: LocalizedText,
    pub price_usd: u32,
    /// Conversion efficiency (0-1)
    pub efficiency: f64,
    pub area_m2: f64,
}

/// Charge controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Controller {
    pub name: LocalizedText,
    pub price_usd: u32,
    pub efficiency: f64,
}

/// Electric outboard motor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Motor {
    pub name: LocalizedText,
    pub price_usd: u32,
    pub efficiency: f64,
    pub thrust_lbs: f64,
    /// Rated top speed (knots)
    pub max_speed_knots: f64,
    pub weight_kg: f64,
}

/// Electric inflation pump
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pump {
    pub name: LocalizedText,
    pub price_usd: u32,
    pub power_draw_w: f64,
}

/// Marine wiring kit
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Wiring {
    pub name: LocalizedText,
    pub price_usd: u32,
    pub efficiency: f64,
}

/// Name and price of one bundle slot, for listings and cost totals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BundleItem {
    pub kind: ComponentKind,
    pub name: LocalizedText,
    pub price_usd: u32,
}

/// The five components that make up one hardware tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComponentBundle {
    pub panel: Panel,
    pub controller: Controller,
    pub motor: Motor,
    pub pump: Pump,
    pub wiring: Wiring,
}

impl ComponentBundle {
    /// Fixed bundle for a tier
    pub fn for_tier(tier: HardwareTier) -> &'static ComponentBundle {
        match tier {
            HardwareTier::Budget => &BUDGET_BUNDLE,
            HardwareTier::Premium => &PREMIUM_BUNDLE,
        }
    }

    /// Bundle slots in listing order: panel, controller, motor, pump, wiring
    pub fn items(&self) -> [BundleItem; 5] {
        [
            BundleItem {
                kind: ComponentKind::Panel,
                name: self.panel.name,
                price_usd: self.panel.price_usd,
            },
            BundleItem {
                kind: ComponentKind::Controller,
                name: self.controller.name,
                price_usd: self.controller.price_usd,
            },
            BundleItem {
                kind: ComponentKind::Motor,
                name: self.motor.name,
                price_usd: self.motor.price_usd,
            },
            BundleItem {
                kind: ComponentKind::Pump,
                name: self.pump.name,
                price_usd: self.pump.price_usd,
            },
            BundleItem {
                kind: ComponentKind::Wiring,
                name: self.wiring.name,
                price_usd: self.wiring.price_usd,
            },
        ]
    }

    /// Sum of the five unit prices (USD)
    pub fn total_price_usd(&self) -> u32 {
        self.items().iter().map(|item| item.price_usd).sum()
    }
}

pub const BUDGET_BUNDLE: ComponentBundle = ComponentBundle {
    panel: Panel {
        name: LocalizedText::same("ECO-WORTHY 150W"),
        price_usd: 180,
        efficiency: 0.15,
        area_m2: 1.2,
    },
    controller: Controller {
        name: LocalizedText::same("PWM 20A"),
        price_usd: 40,
        efficiency: 0.75,
    },
    motor: Motor {
        name: LocalizedText::same("Generic SUP Motor"),
        price_usd: 400,
        efficiency: 0.60,
        thrust_lbs: 30.0,
        max_speed_knots: 2.8,
        weight_kg: 2.5,
    },
    pump: Pump {
        name: LocalizedText::same("OutdoorMaster Shark"),
        price_usd: 90,
        power_draw_w: 150.0,
    },
    wiring: Wiring {
        name: LocalizedText {
            english: "Basic Marine Kit",
            russian: "Базовый морской комплект",
        },
        price_usd: 30,
        efficiency: 0.93,
    },
};

pub const PREMIUM_BUNDLE: ComponentBundle = ComponentBundle {
    panel: Panel {
        name: LocalizedText::same("Twin High-Efficiency 80W"),
        price_usd: 600,
        efficiency: 0.22,
        // two 0.67 m² panels
        area_m2: 0.67 * 2.0,
    },
    controller: Controller {
        name: LocalizedText::same("MPPT Marine"),
        price_usd: 120,
        efficiency: 0.95,
    },
    motor: Motor {
        name: LocalizedText::same("Bixpy J-2 Outboard"),
        price_usd: 800,
        efficiency: 0.85,
        thrust_lbs: 33.0,
        max_speed_knots: 3.3,
        weight_kg: 1.6,
    },
    pump: Pump {
        name: LocalizedText::same("iROCKER"),
        price_usd: 140,
        power_draw_w: 150.0,
    },
    wiring: Wiring {
        name: LocalizedText {
            english: "Premium Marine Kit",
            russian: "Премиум морской комплект",
        },
        price_usd: 60,
        efficiency: 0.97,
    },
};
