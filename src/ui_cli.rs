use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::app::AppError;
use crate::config::Config;
use crate::motor::{self, ProtectionType};

/// 프롬프트 입출력 대상.
/// 평소에는 stdin/stdout, 테스트에서는 메모리 버퍼를 쓴다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    /// 프롬프트를 출력하고 한 줄을 읽는다.
    /// 입력 스트림이 닫히면 사용자 중단으로 본다.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(AppError::Interrupted);
        }
        Ok(buf.trim().to_string())
    }

    pub fn read_f64(&mut self, prompt: &str) -> Result<f64, AppError> {
        let s = self.read_line(prompt)?;
        s.parse::<f64>().map_err(|_| AppError::InvalidNumber(s))
    }

    pub fn read_u32(&mut self, prompt: &str) -> Result<u32, AppError> {
        let s = self.read_line(prompt)?;
        s.parse::<u32>().map_err(|_| AppError::InvalidNumber(s))
    }

    /// 빈 입력이면 `default`를 돌려준다.
    pub fn read_or_default(&mut self, prompt: &str, default: &str) -> Result<String, AppError> {
        let s = self.read_line(prompt)?;
        Ok(if s.is_empty() { default.to_string() } else { s })
    }

    /// y/n 질문. 빈 입력이면 `default`, 그 외에는 y로 시작할 때만 예.
    pub fn read_yes_no(&mut self, prompt: &str, default: bool) -> Result<bool, AppError> {
        let s = self.read_line(prompt)?;
        if s.is_empty() {
            return Ok(default);
        }
        Ok(s.to_ascii_lowercase().starts_with('y'))
    }
}

pub fn print_banner<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), AppError> {
    let rule = "=".repeat(60);
    console.println(&rule)?;
    console.println("NEC 전동기 계산기 (3상 60Hz, NEC 430/310/240)")?;
    console.println(&rule)
}

/// 전동기 한 대에 대한 대화형 계산을 진행한다.
///
/// 코어 계산 오류는 화면에 알리고 다음 단계로 넘어가며, 숫자 파싱 실패와
/// 입력 중단만 호출자에게 전파한다.
pub fn handle_motor_sizing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> Result<(), AppError> {
    let hp = console.read_f64("전동기 출력 (HP): ")?;
    let voltage = console.read_u32("전압 (230 또는 460): ")?;
    debug!(hp, voltage, "motor input");

    let flc = match motor::full_load_current(hp, voltage) {
        Ok(flc) => flc,
        Err(e) => {
            warn!(error = %e, "full-load current lookup failed");
            return console.println(&format!("오류: {e}"));
        }
    };
    info!(flc, "full-load current");

    console.println("\n결과:")?;
    console.println(&format!("   전부하전류(FLC): {flc:.1} A"))?;
    match motor::min_conductor(flc) {
        Ok(c) => console.println(&format!("   최소 도체 (FLC의 125%): {c}"))?,
        Err(e) => {
            warn!(error = %e, "no conductor in table");
            console.println(&format!("   최소 도체 (FLC의 125%): {e}"))?;
        }
    }

    let default_kind = cfg.defaults.protection.as_str();
    let kind = console.read_or_default(
        &format!("\n보호기 종류 (breaker/dual_fuse/std_fuse) [{default_kind}]: "),
        default_kind,
    )?;
    match kind.parse::<ProtectionType>() {
        Ok(kind) => {
            let size = motor::max_protection(flc, kind);
            if !size.is_standard() {
                warn!(amps = size.amps(), "protection exceeds largest standard size");
            }
            console.println(&format!("   최대 보호기 정격: {size}"))?;
        }
        Err(e) => console.println(&format!("   최대 보호기 정격: {e}"))?,
    }

    let lra_default = if cfg.defaults.estimate_lra { "y" } else { "n" };
    let estimate = console.read_yes_no(
        &format!("\n기동전류(LRA)를 추정할까요? (y/n) [{lra_default}]: "),
        cfg.defaults.estimate_lra,
    )?;
    if estimate {
        let default_code = cfg.defaults.nema_code.as_str();
        let code = console.read_or_default(
            &format!("NEMA 코드 (B,C,D,E,F,G,H,J) [{default_code}]: "),
            default_code,
        )?;
        if !motor::is_known_nema_code(&code) {
            warn!(code = %code, "unknown NEMA code, using default multiplier");
            console.println(&format!(
                "   알 수 없는 코드 '{code}' → 기본 배율 {} 적용",
                motor::DEFAULT_LRA_MULTIPLIER
            ))?;
        }
        let lra = motor::locked_rotor_estimate(flc, &code);
        console.println(&format!("   기동전류 추정(LRA): {lra:.0} A"))?;
    }
    Ok(())
}
