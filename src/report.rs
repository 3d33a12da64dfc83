//! 단일 전동기에 대한 사이징 결과를 한 번에 계산하고 출력 형식을 정의한다.

use std::fmt;

use thiserror::Error;

use crate::motor::{
    self, ConductorError, ConductorSize, FlcError, ProtectionError, ProtectionSize, ProtectionType,
};

/// 사이징 요청 입력값.
#[derive(Debug, Clone)]
pub struct MotorRequest {
    /// 전동기 출력(HP)
    pub hp: f64,
    /// 공급 전압(V)
    pub voltage: u32,
    pub protection: ProtectionType,
    /// NEMA 코드. `None`이면 LRA를 추정하지 않는다.
    pub nema_code: Option<String>,
}

/// LRA 추정 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct LraEstimate {
    pub code: String,
    pub multiplier: f64,
    pub amps: f64,
    /// false면 알 수 없는 코드라 기본 배율이 쓰였음을 의미한다.
    pub known_code: bool,
}

/// 사이징 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct MotorReport {
    pub hp: f64,
    pub voltage: u32,
    pub flc_a: f64,
    /// 도체 초과는 보고서 전체를 실패시키지 않는다.
    pub conductor: Result<ConductorSize, ConductorError>,
    pub protection_type: ProtectionType,
    pub protection: ProtectionSize,
    pub lra: Option<LraEstimate>,
}

/// 보고서 계산을 중단시키는 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error(transparent)]
    Flc(#[from] FlcError),
    #[error(transparent)]
    Protection(#[from] ProtectionError),
}

/// FLC → 도체 → 보호기 → (선택) LRA 순으로 계산한다.
pub fn size_motor(req: &MotorRequest) -> Result<MotorReport, SizingError> {
    let flc = motor::full_load_current(req.hp, req.voltage)?;
    let conductor = motor::min_conductor(flc);
    let protection = motor::max_protection(flc, req.protection);
    let lra = req.nema_code.as_deref().map(|code| LraEstimate {
        code: code.trim().to_ascii_uppercase(),
        multiplier: motor::nema_multiplier(code),
        amps: motor::locked_rotor_estimate(flc, code),
        known_code: motor::is_known_nema_code(code),
    });
    Ok(MotorReport {
        hp: req.hp,
        voltage: req.voltage,
        flc_a: flc,
        conductor,
        protection_type: req.protection,
        protection,
        lra,
    })
}

impl fmt::Display for MotorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "결과 ({} HP, {} V):", self.hp, self.voltage)?;
        writeln!(f, "   전부하전류(FLC): {:.1} A", self.flc_a)?;
        match &self.conductor {
            Ok(c) => writeln!(f, "   최소 도체 (FLC의 125%): {c}")?,
            Err(e) => writeln!(f, "   최소 도체 (FLC의 125%): {e}")?,
        }
        writeln!(
            f,
            "   최대 보호기 정격 ({}): {}",
            self.protection_type, self.protection
        )?;
        if let Some(lra) = &self.lra {
            if lra.known_code {
                writeln!(f, "   기동전류 추정(LRA, 코드 {}): {:.0} A", lra.code, lra.amps)?;
            } else {
                writeln!(
                    f,
                    "   기동전류 추정(LRA, 알 수 없는 코드 '{}' → 배율 {}): {:.0} A",
                    lra.code, lra.multiplier, lra.amps
                )?;
            }
        }
        Ok(())
    }
}
