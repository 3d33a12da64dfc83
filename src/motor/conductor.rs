use std::fmt;

use thiserror::Error;

/// NEC 430.22: 단독 전동기 분기회로 도체는 FLC의 125% 이상.
pub const CONDUCTOR_SIZING_FACTOR: f64 = 1.25;

/// 도체 굵기 표기.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GaugeLabel {
    /// 14 ~ 1 AWG
    Awg(u16),
    /// 1/0 ~ 4/0 AWG
    AwgAught(&'static str),
    /// 250 kcmil 이상
    Kcmil(u16),
}

impl GaugeLabel {
    pub fn unit_suffix(self) -> &'static str {
        match self {
            GaugeLabel::Awg(_) | GaugeLabel::AwgAught(_) => "AWG",
            GaugeLabel::Kcmil(_) => "kcmil",
        }
    }
}

impl fmt::Display for GaugeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugeLabel::Awg(n) | GaugeLabel::Kcmil(n) => write!(f, "{n} {}", self.unit_suffix()),
            GaugeLabel::AwgAught(s) => write!(f, "{s} {}", self.unit_suffix()),
        }
    }
}

/// 도체 굵기와 허용전류.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConductorSize {
    pub gauge: GaugeLabel,
    pub ampacity_a: f64,
}

impl ConductorSize {
    pub const fn new(gauge: GaugeLabel, ampacity_a: f64) -> Self {
        Self { gauge, ampacity_a }
    }
}

impl fmt::Display for ConductorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gauge)
    }
}

/// NEC 310.16 구리 75°C 허용전류. 허용전류 오름차순.
pub const CONDUCTOR_TABLE: &[ConductorSize] = &[
    ConductorSize::new(GaugeLabel::Awg(14), 20.0),
    ConductorSize::new(GaugeLabel::Awg(12), 25.0),
    ConductorSize::new(GaugeLabel::Awg(10), 35.0),
    ConductorSize::new(GaugeLabel::Awg(8), 50.0),
    ConductorSize::new(GaugeLabel::Awg(6), 65.0),
    ConductorSize::new(GaugeLabel::Awg(4), 85.0),
    ConductorSize::new(GaugeLabel::Awg(3), 100.0),
    ConductorSize::new(GaugeLabel::Awg(2), 115.0),
    ConductorSize::new(GaugeLabel::Awg(1), 130.0),
    ConductorSize::new(GaugeLabel::AwgAught("1/0"), 150.0),
    ConductorSize::new(GaugeLabel::AwgAught("2/0"), 175.0),
    ConductorSize::new(GaugeLabel::AwgAught("3/0"), 200.0),
    ConductorSize::new(GaugeLabel::AwgAught("4/0"), 230.0),
    ConductorSize::new(GaugeLabel::Kcmil(250), 255.0),
    ConductorSize::new(GaugeLabel::Kcmil(300), 285.0),
    ConductorSize::new(GaugeLabel::Kcmil(350), 310.0),
    ConductorSize::new(GaugeLabel::Kcmil(400), 335.0),
    ConductorSize::new(GaugeLabel::Kcmil(500), 380.0),
];

/// 도체 사이징 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConductorError {
    #[error("요구 전류 {required_a:.1}A가 최대 허용전류 {largest_a}A를 초과합니다 (500 kcmil 초과 도체 필요)")]
    ConductorSizeExceeded { required_a: f64, largest_a: f64 },
}

/// 최소 도체 굵기를 구한다. 요구 전류는 `current × 1.25`.
///
/// NaN 전류는 어떤 허용전류도 만족하지 못하므로 `ConductorSizeExceeded`로 끝난다.
pub fn min_conductor(current: f64) -> Result<ConductorSize, ConductorError> {
    let required = current * CONDUCTOR_SIZING_FACTOR;
    CONDUCTOR_TABLE
        .iter()
        .find(|c| c.ampacity_a >= required)
        .copied()
        .ok_or_else(|| ConductorError::ConductorSizeExceeded {
            required_a: required,
            largest_a: CONDUCTOR_TABLE.last().map_or(0.0, |c| c.ampacity_a),
        })
}
