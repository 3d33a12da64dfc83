use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// NEC 240.6 표준 보호기 정격(A). 오름차순.
pub const STANDARD_PROTECTION_SIZES: &[u32] = &[
    15, 20, 25, 30, 35, 40, 45, 50, 60, 70, 80, 90, 100, 110, 125, 150, 175, 200, 225, 250, 300,
    350, 400, 450, 500, 600, 700, 800, 1000, 1200,
];

/// 분기회로 단락/지락 보호기 종류 (NEC 430.52).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProtectionType {
    /// 반한시형 차단기 (250%)
    Breaker,
    /// 이중소자 지연형 퓨즈 (175%)
    DualFuse,
    /// 일반 비지연형 퓨즈 (300%)
    StdFuse,
}

impl ProtectionType {
    /// 전부하전류에 곱하는 최대 배율.
    pub fn factor(self) -> f64 {
        match self {
            ProtectionType::Breaker => 2.5,
            ProtectionType::DualFuse => 1.75,
            ProtectionType::StdFuse => 3.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProtectionType::Breaker => "breaker",
            ProtectionType::DualFuse => "dual_fuse",
            ProtectionType::StdFuse => "std_fuse",
        }
    }
}

impl fmt::Display for ProtectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProtectionType {
    type Err = ProtectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "breaker" => Ok(ProtectionType::Breaker),
            "dual_fuse" | "fusible_dual" => Ok(ProtectionType::DualFuse),
            "std_fuse" | "fusible_normal" => Ok(ProtectionType::StdFuse),
            _ => Err(ProtectionError::UnsupportedProtectionType(s.to_string())),
        }
    }
}

/// 보호기 사이징 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtectionError {
    #[error("지원하지 않는 보호기 종류: '{0}' (breaker/dual_fuse/std_fuse)")]
    UnsupportedProtectionType(String),
}

/// 보호기 사이징 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProtectionSize {
    /// 표준 정격으로 올림된 값
    Standard(u32),
    /// 최대 표준 정격(1200A)을 넘어 올림하지 않은 계산값
    ExceedsStandard(f64),
}

impl ProtectionSize {
    /// 표준 정격 여부와 무관하게 암페어 값을 돌려준다.
    pub fn amps(self) -> f64 {
        match self {
            ProtectionSize::Standard(a) => f64::from(a),
            ProtectionSize::ExceedsStandard(a) => a,
        }
    }

    pub fn is_standard(self) -> bool {
        matches!(self, ProtectionSize::Standard(_))
    }
}

impl fmt::Display for ProtectionSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtectionSize::Standard(a) => write!(f, "{a} A"),
            ProtectionSize::ExceedsStandard(a) => write!(f, "{a:.1} A (표준 정격 초과)"),
        }
    }
}

/// 최대 보호기 정격을 계산한다. `current × factor` 이상인 첫 표준 정격을 고른다.
///
/// NaN 전류는 어떤 표준 정격과도 비교되지 않으므로 `ExceedsStandard(NaN)`이 된다.
/// 유효한 전류는 [`full_load_current`](fn@super::full_load_current)에서 얻는다.
pub fn max_protection(current: f64, kind: ProtectionType) -> ProtectionSize {
    let threshold = current * kind.factor();
    STANDARD_PROTECTION_SIZES
        .iter()
        .copied()
        .find(|&size| f64::from(size) >= threshold)
        .map(ProtectionSize::Standard)
        .unwrap_or(ProtectionSize::ExceedsStandard(threshold))
}

/// 문자열로 받은 보호기 종류로 [`max_protection`]을 수행한다.
pub fn max_protection_for(current: f64, kind: &str) -> Result<ProtectionSize, ProtectionError> {
    let kind: ProtectionType = kind.parse()?;
    Ok(max_protection(current, kind))
}
