use thiserror::Error;

/// 전부하전류 테이블의 한 점 (마력, 전류).
#[derive(Debug, Clone, Copy)]
pub struct FlcPoint {
    pub hp: f64,
    pub amps: f64,
}

impl FlcPoint {
    pub const fn new(hp: f64, amps: f64) -> Self {
        Self { hp, amps }
    }
}

const fn pt(hp: f64, amps: f64) -> FlcPoint {
    FlcPoint::new(hp, amps)
}

/// NEC Table 430.250 (3상, 60Hz) 230V 전부하전류.
pub const FLC_TABLE_230V: &[FlcPoint] = &[
    pt(1.0, 3.4),
    pt(2.0, 6.8),
    pt(3.0, 9.6),
    pt(5.0, 15.2),
    pt(7.5, 22.0),
    pt(10.0, 28.0),
    pt(15.0, 42.0),
    pt(20.0, 54.0),
    pt(25.0, 68.0),
    pt(30.0, 80.0),
    pt(40.0, 104.0),
    pt(50.0, 130.0),
    pt(60.0, 154.0),
    pt(75.0, 192.0),
    pt(100.0, 248.0),
    pt(125.0, 312.0),
    pt(150.0, 360.0),
    pt(200.0, 480.0),
];

/// NEC Table 430.250 (3상, 60Hz) 460V 전부하전류.
pub const FLC_TABLE_460V: &[FlcPoint] = &[
    pt(1.0, 1.7),
    pt(2.0, 3.4),
    pt(3.0, 4.8),
    pt(5.0, 7.6),
    pt(7.5, 11.0),
    pt(10.0, 14.0),
    pt(15.0, 21.0),
    pt(20.0, 27.0),
    pt(25.0, 34.0),
    pt(30.0, 40.0),
    pt(40.0, 52.0),
    pt(50.0, 65.0),
    pt(60.0, 77.0),
    pt(75.0, 96.0),
    pt(100.0, 124.0),
    pt(125.0, 156.0),
    pt(150.0, 180.0),
    pt(200.0, 240.0),
];

/// 지원하는 공급 전압.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyVoltage {
    V230,
    V460,
}

impl SupplyVoltage {
    pub fn volts(self) -> u32 {
        match self {
            SupplyVoltage::V230 => 230,
            SupplyVoltage::V460 => 460,
        }
    }

    /// 해당 전압의 전부하전류 테이블.
    pub fn table(self) -> &'static [FlcPoint] {
        match self {
            SupplyVoltage::V230 => FLC_TABLE_230V,
            SupplyVoltage::V460 => FLC_TABLE_460V,
        }
    }
}

impl TryFrom<u32> for SupplyVoltage {
    type Error = FlcError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            230 => Ok(SupplyVoltage::V230),
            460 => Ok(SupplyVoltage::V460),
            other => Err(FlcError::UnsupportedVoltage(other)),
        }
    }
}

/// 전부하전류 조회 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlcError {
    /// 230V/460V 이외의 전압
    #[error("{0}V는 지원하지 않는 전압입니다 (230 또는 460 사용)")]
    UnsupportedVoltage(u32),
    /// 테이블 범위 밖의 마력 (외삽하지 않음)
    #[error("마력 {hp}HP가 테이블 범위({min}~{max}HP)를 벗어났습니다")]
    OutOfRange { hp: f64, min: f64, max: f64 },
}

/// 마력과 전압으로 전부하전류(A)를 구한다.
///
/// 테이블 값과 정확히 일치하면 그 값을, 인접한 두 점 사이면 선형 보간 값을 반환한다.
pub fn full_load_current(hp: f64, voltage: u32) -> Result<f64, FlcError> {
    let supply = SupplyVoltage::try_from(voltage)?;
    lookup(supply.table(), hp)
}

fn lookup(points: &[FlcPoint], hp: f64) -> Result<f64, FlcError> {
    let (min, max) = match (points.first(), points.last()) {
        (Some(first), Some(last)) => (first.hp, last.hp),
        _ => {
            return Err(FlcError::OutOfRange {
                hp,
                min: f64::NAN,
                max: f64::NAN,
            })
        }
    };

    if let Some(p) = points.iter().find(|p| p.hp == hp) {
        return Ok(p.amps);
    }

    for win in points.windows(2) {
        let (a, b) = (win[0], win[1]);
        if a.hp < hp && hp < b.hp {
            return Ok(a.amps + (b.amps - a.amps) * (hp - a.hp) / (b.hp - a.hp));
        }
    }

    // NaN 과 범위 밖 값 모두 여기로 떨어진다
    Err(FlcError::OutOfRange { hp, min, max })
}
