use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::SelectionError;
use crate::model::*;

fn default_carat() -> f64 {
    CARAT_DEFAULT
}
fn default_metal() -> String {
    MetalType::YellowGold.as_str().to_string()
}
fn default_setting() -> String {
    SettingStyle::Solitaire.as_str().to_string()
}
fn default_color() -> String {
    ColorGrade::default().as_str().to_string()
}
fn default_clarity() -> String {
    ClarityGrade::default().as_str().to_string()
}
fn default_certificate() -> String {
    Certificate::default().as_str().to_string()
}

/// Raw choices as collected by a selection shell, before validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Selection {
    pub shape: String,
    #[serde(default = "default_carat")]
    pub carat: f64,
    #[serde(default = "default_metal")]
    pub metal: String,
    #[serde(default = "default_setting")]
    pub setting: String,
    #[serde(default)]
    pub side_stones: Vec<String>,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default = "default_clarity")]
    pub clarity: String,
    #[serde(default = "default_certificate")]
    pub certificate: String,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            shape: GemShape::Round.as_str().to_string(),
            carat: default_carat(),
            metal: default_metal(),
            setting: default_setting(),
            side_stones: Vec::new(),
            color: default_color(),
            clarity: default_clarity(),
            certificate: default_certificate(),
        }
    }
}

fn required<T>(
    field: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, SelectionError> {
    parse(value).ok_or_else(|| SelectionError::Unknown {
        field,
        value: value.to_string(),
    })
}

impl Selection {
    pub fn from_json(txt: &str) -> Result<Self, SelectionError> {
        Ok(serde_json::from_str(txt)?)
    }

    /// Validate and type the selection.
    ///
    /// Shape and setting never fail: unknown names are kept as
    /// [`Choice::Unrecognized`] so the sketch can fall back. Every other field
    /// must be valid.
    pub fn resolve(&self) -> Result<RingDesign, SelectionError> {
        let carat =
            Carat::new(self.carat).ok_or(SelectionError::CaratOutOfRange(self.carat))?;
        let shape = Choice::from_parsed(&self.shape, GemShape::parse(&self.shape));
        if let Choice::Unrecognized(name) = &shape {
            warn!(shape = %name, "unrecognized gem shape");
        }
        let setting = Choice::from_parsed(&self.setting, SettingStyle::parse(&self.setting));
        if let Choice::Unrecognized(name) = &setting {
            warn!(setting = %name, "unrecognized setting, treating as solitaire");
        }
        let side_stones = self
            .side_stones
            .iter()
            .map(|s| required("side stone shape", s, SideStoneShape::parse))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RingDesign {
            shape,
            carat,
            metal: required("metal", &self.metal, MetalType::parse)?,
            setting,
            side_stones,
            color: required("color grade", &self.color, ColorGrade::parse)?,
            clarity: required("clarity grade", &self.clarity, ClarityGrade::parse)?,
            certificate: required("certificate", &self.certificate, Certificate::parse)?,
        })
    }
}
