use serde::{Deserialize, Serialize};

/// Smallest carat weight the configurator offers.
pub const CARAT_MIN: f64 = 0.5;
/// Largest carat weight the configurator offers.
pub const CARAT_MAX: f64 = 3.0;
pub const CARAT_DEFAULT: f64 = 1.0;
/// Granularity of the carat control in the selection shell.
pub const CARAT_STEP: f64 = 0.1;

// Display labels may carry a translation after the key ("Round (עגול)"),
// so only the leading word is compared.
fn leading_word(s: &str) -> &str {
    let s = s.trim();
    let end = s
        .find(|c: char| c.is_whitespace() || c == '(')
        .unwrap_or(s.len());
    &s[..end]
}

fn snake_key(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            ' ' | '-' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Cut of the primary gem.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum GemShape {
    Round,
    Princess,
    Oval,
    Emerald,
    Cushion,
    Pear,
    Marquise,
    Asscher,
    Radiant,
}

impl GemShape {
    pub const ALL: [GemShape; 9] = [
        GemShape::Round,
        GemShape::Princess,
        GemShape::Oval,
        GemShape::Emerald,
        GemShape::Cushion,
        GemShape::Pear,
        GemShape::Marquise,
        GemShape::Asscher,
        GemShape::Radiant,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            GemShape::Round => "Round",
            GemShape::Princess => "Princess",
            GemShape::Oval => "Oval",
            GemShape::Emerald => "Emerald",
            GemShape::Cushion => "Cushion",
            GemShape::Pear => "Pear",
            GemShape::Marquise => "Marquise",
            GemShape::Asscher => "Asscher",
            GemShape::Radiant => "Radiant",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let w = leading_word(s);
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(w))
    }
}

/// Structural style holding the main gem.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum SettingStyle {
    Solitaire,
    Halo,
    ThreeStone,
    SevenStone,
}

impl SettingStyle {
    pub const ALL: [SettingStyle; 4] = [
        SettingStyle::Solitaire,
        SettingStyle::Halo,
        SettingStyle::ThreeStone,
        SettingStyle::SevenStone,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SettingStyle::Solitaire => "solitaire",
            SettingStyle::Halo => "halo",
            SettingStyle::ThreeStone => "three_stone",
            SettingStyle::SevenStone => "seven_stone",
        }
    }

    /// Number of side-stone shapes the user picks for this style.
    pub fn side_stone_slots(self) -> usize {
        match self {
            SettingStyle::Solitaire | SettingStyle::Halo => 0,
            SettingStyle::ThreeStone => 1,
            SettingStyle::SevenStone => 3,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match snake_key(s).as_str() {
            "solitaire" => Some(SettingStyle::Solitaire),
            "halo" => Some(SettingStyle::Halo),
            "three_stone" | "threestone" => Some(SettingStyle::ThreeStone),
            "seven_stone" | "sevenstone" => Some(SettingStyle::SevenStone),
            _ => None,
        }
    }
}

/// Reduced shape set available for auxiliary stones.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum SideStoneShape {
    Round,
    Marquise,
    Pear,
}

impl SideStoneShape {
    pub const ALL: [SideStoneShape; 3] = [
        SideStoneShape::Round,
        SideStoneShape::Marquise,
        SideStoneShape::Pear,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SideStoneShape::Round => "Round",
            SideStoneShape::Marquise => "Marquise",
            SideStoneShape::Pear => "Pear",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let w = leading_word(s);
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(w))
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetalType {
    YellowGold,
    WhiteGold,
    RoseGold,
    Platinum,
}

impl MetalType {
    pub const ALL: [MetalType; 4] = [
        MetalType::YellowGold,
        MetalType::WhiteGold,
        MetalType::RoseGold,
        MetalType::Platinum,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetalType::YellowGold => "yellow_gold",
            MetalType::WhiteGold => "white_gold",
            MetalType::RoseGold => "rose_gold",
            MetalType::Platinum => "platinum",
        }
    }

    /// Fixed RGB used for band, prongs and halo strokes.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            MetalType::YellowGold => [212, 175, 55],
            MetalType::WhiteGold => [192, 192, 192],
            MetalType::RoseGold => [183, 110, 121],
            MetalType::Platinum => [229, 228, 226],
        }
    }

    /// `#rrggbb` form of [`MetalType::rgb`].
    pub fn hex(self) -> String {
        let [r, g, b] = self.rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match snake_key(s).as_str() {
            "yellow_gold" => Some(MetalType::YellowGold),
            "white_gold" => Some(MetalType::WhiteGold),
            "rose_gold" => Some(MetalType::RoseGold),
            "platinum" => Some(MetalType::Platinum),
            _ => None,
        }
    }
}

/// GIA color grade, worst (J) to best (D).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ColorGrade {
    J,
    I,
    H,
    #[default]
    G,
    F,
    E,
    D,
}

impl ColorGrade {
    pub const ALL: [ColorGrade; 7] = [
        ColorGrade::J,
        ColorGrade::I,
        ColorGrade::H,
        ColorGrade::G,
        ColorGrade::F,
        ColorGrade::E,
        ColorGrade::D,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorGrade::J => "J",
            ColorGrade::I => "I",
            ColorGrade::H => "H",
            ColorGrade::G => "G",
            ColorGrade::F => "F",
            ColorGrade::E => "E",
            ColorGrade::D => "D",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
    }
}

/// Clarity grade, worst (SI2) to best (FL).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ClarityGrade {
    SI2,
    SI1,
    VS2,
    #[default]
    VS1,
    VVS2,
    VVS1,
    IF,
    FL,
}

impl ClarityGrade {
    pub const ALL: [ClarityGrade; 8] = [
        ClarityGrade::SI2,
        ClarityGrade::SI1,
        ClarityGrade::VS2,
        ClarityGrade::VS1,
        ClarityGrade::VVS2,
        ClarityGrade::VVS1,
        ClarityGrade::IF,
        ClarityGrade::FL,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ClarityGrade::SI2 => "SI2",
            ClarityGrade::SI1 => "SI1",
            ClarityGrade::VS2 => "VS2",
            ClarityGrade::VS1 => "VS1",
            ClarityGrade::VVS2 => "VVS2",
            ClarityGrade::VVS1 => "VVS1",
            ClarityGrade::IF => "IF",
            ClarityGrade::FL => "FL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(s))
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Certificate {
    #[default]
    GIA,
    CGL,
}

impl Certificate {
    pub const ALL: [Certificate; 2] = [Certificate::GIA, Certificate::CGL];

    pub fn as_str(self) -> &'static str {
        match self {
            Certificate::GIA => "GIA",
            Certificate::CGL => "CGL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let w = leading_word(s);
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(w))
    }
}

/// Carat weight, guaranteed to lie in `[CARAT_MIN, CARAT_MAX]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Serialize)]
pub struct Carat(f64);

impl Carat {
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && (CARAT_MIN..=CARAT_MAX).contains(&value) {
            Some(Carat(value))
        } else {
            None
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for Carat {
    fn default() -> Self {
        Carat(CARAT_DEFAULT)
    }
}

/// A selection that may name something the engine does not know.
/// Shape and setting are resolved this way so that rendering can fall back
/// instead of failing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Choice<T> {
    Known(T),
    Unrecognized(String),
}

impl<T: Copy> Choice<T> {
    pub fn known(&self) -> Option<T> {
        match self {
            Choice::Known(v) => Some(*v),
            Choice::Unrecognized(_) => None,
        }
    }

    pub fn from_parsed(raw: &str, parsed: Option<T>) -> Self {
        match parsed {
            Some(v) => Choice::Known(v),
            None => Choice::Unrecognized(raw.to_string()),
        }
    }
}

/// Fully typed ring configuration shared by the pricing calculator and the
/// sketch compositor.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RingDesign {
    pub shape: Choice<GemShape>,
    pub carat: Carat,
    pub metal: MetalType,
    pub setting: Choice<SettingStyle>,
    pub side_stones: Vec<SideStoneShape>,
    pub color: ColorGrade,
    pub clarity: ClarityGrade,
    pub certificate: Certificate,
}

impl RingDesign {
    /// Setting style used for geometry and pricing; unrecognized styles are
    /// treated as solitaire.
    pub fn effective_setting(&self) -> SettingStyle {
        self.setting.known().unwrap_or(SettingStyle::Solitaire)
    }

    /// Side-stone shapes padded or truncated to the number of slots the
    /// effective setting has. Padding uses `Round`; each adjustment is
    /// reported in the returned warnings.
    pub fn side_stone_slots(&self) -> (Vec<SideStoneShape>, Vec<String>) {
        let want = self.effective_setting().side_stone_slots();
        let mut warnings = Vec::new();
        let mut out: Vec<SideStoneShape> = self.side_stones.iter().copied().take(want).collect();
        if self.side_stones.len() > want && want > 0 {
            warnings.push(format!(
                "{} side-stone shapes given, {} used",
                self.side_stones.len(),
                want
            ));
        }
        while out.len() < want {
            warnings.push(format!("side-stone slot {} defaulted to Round", out.len() + 1));
            out.push(SideStoneShape::Round);
        }
        (out, warnings)
    }
}
