use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PricingError;
use crate::model::*;

/// Label printed next to every amount. No conversion is applied.
pub const DISPLAY_CURRENCY: &str = "USD";

/// Multiplier and base-price tables. Built once and handed to
/// [`PricingCalculator::new`]; nothing mutates them afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTables {
    pub base_per_carat: f64,
    pub shape_factor: BTreeMap<GemShape, f64>,
    pub color_factor: BTreeMap<ColorGrade, f64>,
    pub clarity_factor: BTreeMap<ClarityGrade, f64>,
    pub certificate_factor: BTreeMap<Certificate, f64>,
    pub metal_base: BTreeMap<MetalType, f64>,
    pub setting_base: BTreeMap<SettingStyle, f64>,
    pub side_stone_factor: BTreeMap<SideStoneShape, f64>,
}

impl Default for PriceTables {
    fn default() -> Self {
        use ClarityGrade::*;
        use ColorGrade::*;
        PriceTables {
            base_per_carat: 4000.0,
            shape_factor: BTreeMap::from([
                (GemShape::Round, 1.0),
                (GemShape::Princess, 0.85),
                (GemShape::Oval, 0.9),
                (GemShape::Emerald, 0.8),
                (GemShape::Cushion, 0.85),
                (GemShape::Pear, 0.88),
                (GemShape::Marquise, 0.82),
                (GemShape::Asscher, 0.83),
                (GemShape::Radiant, 0.87),
            ]),
            color_factor: BTreeMap::from([
                (J, 0.75),
                (I, 0.82),
                (H, 0.9),
                (G, 1.0),
                (F, 1.12),
                (E, 1.25),
                (D, 1.4),
            ]),
            clarity_factor: BTreeMap::from([
                (SI2, 0.7),
                (SI1, 0.8),
                (VS2, 0.9),
                (VS1, 1.0),
                (VVS2, 1.12),
                (VVS1, 1.25),
                (IF, 1.4),
                (FL, 1.6),
            ]),
            certificate_factor: BTreeMap::from([
                (Certificate::GIA, 1.0),
                (Certificate::CGL, 0.9),
            ]),
            metal_base: BTreeMap::from([
                (MetalType::YellowGold, 800.0),
                (MetalType::WhiteGold, 850.0),
                (MetalType::RoseGold, 820.0),
                (MetalType::Platinum, 1400.0),
            ]),
            setting_base: BTreeMap::from([
                (SettingStyle::Solitaire, 0.0),
                (SettingStyle::Halo, 600.0),
                (SettingStyle::ThreeStone, 900.0),
                (SettingStyle::SevenStone, 1500.0),
            ]),
            side_stone_factor: BTreeMap::from([
                (SideStoneShape::Round, 1.0),
                (SideStoneShape::Marquise, 1.1),
                (SideStoneShape::Pear, 1.15),
            ]),
        }
    }
}

fn check<K: std::fmt::Debug>(
    table: &str,
    m: &BTreeMap<K, f64>,
) -> Result<(), PricingError> {
    for (k, v) in m {
        if *v < 0.0 || !v.is_finite() {
            return Err(PricingError::Negative {
                key: format!("{table}.{k:?}"),
                value: *v,
            });
        }
    }
    Ok(())
}

impl PriceTables {
    /// Load tables from JSON. Tables missing from the document keep their
    /// built-in values.
    pub fn from_json(txt: &str) -> Result<Self, PricingError> {
        let t: PriceTables = serde_json::from_str(txt)?;
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<(), PricingError> {
        if self.base_per_carat < 0.0 || !self.base_per_carat.is_finite() {
            return Err(PricingError::Negative {
                key: "base_per_carat".into(),
                value: self.base_per_carat,
            });
        }
        check("shape_factor", &self.shape_factor)?;
        check("color_factor", &self.color_factor)?;
        check("clarity_factor", &self.clarity_factor)?;
        check("certificate_factor", &self.certificate_factor)?;
        check("metal_base", &self.metal_base)?;
        check("setting_base", &self.setting_base)?;
        check("side_stone_factor", &self.side_stone_factor)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Quote {
    pub diamond_cost: f64,
    pub setting_cost: f64,
    pub total_cost: f64,
    pub currency: &'static str,
}

fn cents(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn lookup<K: Ord + std::fmt::Debug>(table: &str, m: &BTreeMap<K, f64>, k: &K, default: f64) -> f64 {
    match m.get(k) {
        Some(v) => *v,
        None => {
            warn!(table, key = ?k, default, "price table entry missing");
            default
        }
    }
}

/// Pure lookup-table product over a [`RingDesign`].
#[derive(Clone, Debug, Default)]
pub struct PricingCalculator {
    tables: PriceTables,
}

impl PricingCalculator {
    pub fn new(tables: PriceTables) -> Self {
        PricingCalculator { tables }
    }

    pub fn tables(&self) -> &PriceTables {
        &self.tables
    }

    pub fn diamond_cost(&self, d: &RingDesign) -> f64 {
        let t = &self.tables;
        let shape = match d.shape.known() {
            Some(s) => lookup("shape_factor", &t.shape_factor, &s, 1.0),
            None => 1.0,
        };
        t.base_per_carat
            * d.carat.get()
            * shape
            * lookup("color_factor", &t.color_factor, &d.color, 1.0)
            * lookup("clarity_factor", &t.clarity_factor, &d.clarity, 1.0)
            * lookup("certificate_factor", &t.certificate_factor, &d.certificate, 1.0)
    }

    pub fn setting_cost(&self, d: &RingDesign) -> f64 {
        let t = &self.tables;
        let (slots, _) = d.side_stone_slots();
        let avg = if slots.is_empty() {
            1.0
        } else {
            slots
                .iter()
                .map(|s| lookup("side_stone_factor", &t.side_stone_factor, s, 1.0))
                .sum::<f64>()
                / slots.len() as f64
        };
        lookup("metal_base", &t.metal_base, &d.metal, 0.0)
            + lookup("setting_base", &t.setting_base, &d.effective_setting(), 0.0) * avg
    }

    pub fn quote(&self, d: &RingDesign) -> Quote {
        let diamond = cents(self.diamond_cost(d));
        let setting = cents(self.setting_cost(d));
        let q = Quote {
            diamond_cost: diamond,
            setting_cost: setting,
            total_cost: cents(diamond + setting),
            currency: DISPLAY_CURRENCY,
        };
        debug!(?q, "priced design");
        q
    }
}
