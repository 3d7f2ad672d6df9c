use std::{collections::HashMap, fmt, str::FromStr, sync::LazyLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const BUILTIN_PROFILES: &str = include_str!("../../config/profiles.json");

static BUILTIN: LazyLock<Result<ProfileTable, ProfileError>> =
    LazyLock::new(|| ProfileTable::from_json(BUILTIN_PROFILES));

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown {kind} {value:?}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentType {
    Hero,
    TextPrimary,
    TextSecondary,
    Gallery,
    Interactive,
}

impl ContentType {
    pub const ALL: [ContentType; 5] = [
        ContentType::Hero,
        ContentType::TextPrimary,
        ContentType::TextSecondary,
        ContentType::Gallery,
        ContentType::Interactive,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Hero => "hero",
            ContentType::TextPrimary => "text-primary",
            ContentType::TextSecondary => "text-secondary",
            ContentType::Gallery => "gallery",
            ContentType::Interactive => "interactive",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContentType::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "content type",
                value: s.to_string(),
            })
    }
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Intensity {
    Subtle,
    #[default]
    Moderate,
    Enhanced,
}

impl Intensity {
    pub const ALL: [Intensity; 3] = [Intensity::Subtle, Intensity::Moderate, Intensity::Enhanced];

    pub fn as_str(self) -> &'static str {
        match self {
            Intensity::Subtle => "subtle",
            Intensity::Moderate => "moderate",
            Intensity::Enhanced => "enhanced",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intensity {
    type Err = ParseEnumError;

    /// Anything but the three named levels is rejected; there is no nearest-level fallback.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intensity::ALL
            .into_iter()
            .find(|i| i.as_str() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "intensity",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityLevel {
    pub opacity: f64,
    pub blur_px: f64,
}

/// CSS-style cubic bezier control points `(x1, y1, x2, y2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier(pub [f64; 4]);

impl CubicBezier {
    pub fn css(&self) -> String {
        let [x1, y1, x2, y2] = self.0;
        format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentProfile {
    pub content_type: ContentType,
    levels: [IntensityLevel; 3],
    pub duration_ms: f64,
    pub easing: CubicBezier,
}

impl ContentProfile {
    pub fn level(&self, intensity: Intensity) -> IntensityLevel {
        self.levels[intensity.index()]
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("couldn't parse content profiles: {0}")]
    Parse(String),
    #[error(transparent)]
    UnknownKey(#[from] ParseEnumError),
    #[error("no profile defined for {0}")]
    MissingContentType(ContentType),
    #[error("{0}: {1} intensity is not defined")]
    MissingIntensity(ContentType, Intensity),
    #[error("{0}/{1}: opacity {2} is outside [0, 1]")]
    Opacity(ContentType, Intensity, f64),
    #[error("{0}/{1}: blur {2} must be a non-negative number of pixels")]
    Blur(ContentType, Intensity, f64),
    #[error("{0}: {1} must not decrease from subtle to enhanced")]
    NotMonotonic(ContentType, &'static str),
    #[error("{0}: easing x control points must lie in [0, 1]")]
    Easing(ContentType),
    #[error("{0}: duration must be positive")]
    Duration(ContentType),
}

#[derive(Deserialize)]
struct RawProfile {
    levels: HashMap<String, IntensityLevel>,
    duration_ms: f64,
    easing: CubicBezier,
}

/// Validated, read-only lookup of every content profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileTable {
    profiles: Vec<ContentProfile>,
}

impl ProfileTable {
    /// Validates the table shipped with the site. Called once at startup so a bad
    /// definition stops the server instead of surfacing mid-render.
    pub fn check_builtin() -> Result<&'static ProfileTable, ProfileError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    /// The table shipped with the site. Only valid after [`ProfileTable::check_builtin`]
    /// succeeded; the unit tests cover the shipped definition.
    pub fn builtin() -> &'static ProfileTable {
        BUILTIN
            .as_ref()
            .expect("built-in content profiles should validate")
    }

    pub fn from_json(json: &str) -> Result<Self, ProfileError> {
        let raw = serde_json::from_str::<HashMap<String, RawProfile>>(json)
            .map_err(|e| ProfileError::Parse(e.to_string()))?;
        let mut by_type = raw
            .into_iter()
            .map(|(key, profile)| -> Result<_, ProfileError> {
                Ok((key.parse::<ContentType>()?, profile))
            })
            .collect::<Result<HashMap<_, _>, ProfileError>>()?;

        let profiles = ContentType::ALL
            .into_iter()
            .map(|content_type| {
                let raw = by_type
                    .remove(&content_type)
                    .ok_or(ProfileError::MissingContentType(content_type))?;
                validate(content_type, raw)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProfileTable { profiles })
    }

    pub fn get(&self, content_type: ContentType) -> &ContentProfile {
        // validation guarantees one profile per content type, in declaration order
        &self.profiles[content_type as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentProfile> {
        self.profiles.iter()
    }
}

fn validate(content_type: ContentType, raw: RawProfile) -> Result<ContentProfile, ProfileError> {
    let mut levels = raw
        .levels
        .into_iter()
        .map(|(key, level)| -> Result<_, ProfileError> { Ok((key.parse::<Intensity>()?, level)) })
        .collect::<Result<HashMap<_, _>, ProfileError>>()?;

    let mut ordered = [IntensityLevel {
        opacity: 0.0,
        blur_px: 0.0,
    }; 3];
    for intensity in Intensity::ALL {
        let level = levels
            .remove(&intensity)
            .ok_or(ProfileError::MissingIntensity(content_type, intensity))?;
        if !(0.0..=1.0).contains(&level.opacity) {
            return Err(ProfileError::Opacity(content_type, intensity, level.opacity));
        }
        if !(level.blur_px >= 0.0) || !level.blur_px.is_finite() {
            return Err(ProfileError::Blur(content_type, intensity, level.blur_px));
        }
        ordered[intensity.index()] = level;
    }

    if ordered.windows(2).any(|w| w[1].opacity < w[0].opacity) {
        return Err(ProfileError::NotMonotonic(content_type, "opacity"));
    }
    if ordered.windows(2).any(|w| w[1].blur_px < w[0].blur_px) {
        return Err(ProfileError::NotMonotonic(content_type, "blur"));
    }

    let [x1, _, x2, _] = raw.easing.0;
    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
        return Err(ProfileError::Easing(content_type));
    }
    if !(raw.duration_ms > 0.0) {
        return Err(ProfileError::Duration(content_type));
    }

    Ok(ContentProfile {
        content_type,
        levels: ordered,
        duration_ms: raw.duration_ms,
        easing: raw.easing,
    })
}
