use crate::utils::error::CosError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// COS 地域代號
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Region {
    ApBeijing,
    ApShanghai,
    ApGuangzhou,
    ApChengdu,
    ApChongqing,
    ApShenzhenFsi,
    ApShanghaiFsi,
    ApBeijingFsi,
    ApHongkong,
    ApSingapore,
    ApMumbai,
    ApSeoul,
    ApBangkok,
    ApTokyo,
    NaSiliconvalley,
    NaAshburn,
    NaToronto,
    EuFrankfurt,
    EuMoscow,
}

impl Region {
    pub const ALL: [Region; 19] = [
        Region::ApBeijing,
        Region::ApShanghai,
        Region::ApGuangzhou,
        Region::ApChengdu,
        Region::ApChongqing,
        Region::ApShenzhenFsi,
        Region::ApShanghaiFsi,
        Region::ApBeijingFsi,
        Region::ApHongkong,
        Region::ApSingapore,
        Region::ApMumbai,
        Region::ApSeoul,
        Region::ApBangkok,
        Region::ApTokyo,
        Region::NaSiliconvalley,
        Region::NaAshburn,
        Region::NaToronto,
        Region::EuFrankfurt,
        Region::EuMoscow,
    ];

    /// Identifiers in the same order as [`Region::ALL`].
    pub const NAMES: [&'static str; 19] = [
        "ap-beijing",
        "ap-shanghai",
        "ap-guangzhou",
        "ap-chengdu",
        "ap-chongqing",
        "ap-shenzhen-fsi",
        "ap-shanghai-fsi",
        "ap-beijing-fsi",
        "ap-hongkong",
        "ap-singapore",
        "ap-mumbai",
        "ap-seoul",
        "ap-bangkok",
        "ap-tokyo",
        "na-siliconvalley",
        "na-ashburn",
        "na-toronto",
        "eu-frankfurt",
        "eu-moscow",
    ];

    pub fn as_str(&self) -> &'static str {
        Self::NAMES[*self as usize]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = CosError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::NAMES
            .iter()
            .position(|name| *name == wanted)
            .map(|idx| Self::ALL[idx])
            .ok_or_else(|| CosError::InvalidConfigValueError {
                field: "region".to_string(),
                value: s.to_string(),
                reason: format!("Unknown COS region. Valid regions: {}", Self::NAMES.join(", ")),
            })
    }
}
