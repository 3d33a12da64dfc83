use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, info};

use crate::config::{Config, ConfigError};
use crate::motor::ProtectionType;
use crate::report::{self, MotorRequest, SizingError};
use crate::ui_cli::{self, Console};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    #[error("계산 오류: {0}")]
    Sizing(#[from] SizingError),
    /// 숫자가 아닌 입력
    #[error("숫자 값을 올바르게 입력하세요 (소수점은 '.' 사용): '{0}'")]
    InvalidNumber(String),
    /// 입력 스트림 종료 (Ctrl-D 등)
    #[error("사용자에 의해 입력이 종료되었습니다")]
    Interrupted,
    #[error("인터럽트 핸들러 설정 오류: {0}")]
    Signal(#[from] ctrlc::Error),
}

/// Ctrl-C 또는 입력 종료 시 출력하는 안내 문구.
pub const INTERRUPTED_MESSAGE: &str = "프로그램이 사용자에 의해 종료되었습니다.";

/// Ctrl-C(SIGINT)를 받으면 안내 문구를 출력하고 정상 종료한다.
///
/// 대화형 세션은 stdin 에서 블로킹되므로 핸들러 스레드에서 바로 프로세스를 끝낸다.
pub fn install_interrupt_handler() -> Result<(), AppError> {
    ctrlc::set_handler(|| {
        println!("\n{INTERRUPTED_MESSAGE}");
        std::process::exit(0);
    })?;
    Ok(())
}

/// 명령행 인자로 바로 계산할 때의 입력.
#[derive(Debug, Clone)]
pub struct OneShotArgs {
    pub hp: f64,
    pub voltage: u32,
    pub protection: Option<String>,
    pub nema_code: Option<String>,
    pub skip_lra: bool,
}

/// 대화형 계산 루프를 실행한다.
pub fn run_interactive<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> Result<(), AppError> {
    ui_cli::print_banner(console)?;
    loop {
        ui_cli::handle_motor_sizing(console, cfg)?;
        if !console.read_yes_no("\n다른 전동기를 계산할까요? (y/n) [n]: ", false)? {
            break;
        }
        console.println("")?;
    }
    debug!("interactive session finished");
    Ok(())
}

/// 프롬프트 없이 한 번 계산하고 보고서를 출력한다.
pub fn run_one_shot<W: Write>(
    args: &OneShotArgs,
    cfg: &Config,
    out: &mut W,
) -> Result<(), AppError> {
    let protection = match args.protection.as_deref() {
        Some(s) => s.parse::<ProtectionType>().map_err(SizingError::from)?,
        None => cfg.defaults.protection,
    };
    let nema_code = if args.skip_lra || (!cfg.defaults.estimate_lra && args.nema_code.is_none()) {
        None
    } else {
        Some(
            args.nema_code
                .clone()
                .unwrap_or_else(|| cfg.defaults.nema_code.clone()),
        )
    };
    let req = MotorRequest {
        hp: args.hp,
        voltage: args.voltage,
        protection,
        nema_code,
    };
    debug!(?req, "one-shot request");
    let report = report::size_motor(&req)?;
    info!(flc = report.flc_a, "motor sized");
    write!(out, "{report}")?;
    Ok(())
}
