use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nec_motor_toolbox::app::{self, AppError, OneShotArgs};
use nec_motor_toolbox::config::{self, DEFAULT_CONFIG_FILE};
use nec_motor_toolbox::ui_cli::Console;
use tracing_subscriber::EnvFilter;

/// NEC 기준 3상 전동기 FLC/도체/보호기/LRA 계산기.
#[derive(Parser, Debug)]
#[command(name = "nec_motor_toolbox", version)]
struct Cli {
    /// 전동기 출력(HP). --voltage와 함께 주면 프롬프트 없이 계산한다.
    #[arg(long, requires = "voltage")]
    hp: Option<f64>,

    /// 공급 전압(230 또는 460)
    #[arg(long, requires = "hp")]
    voltage: Option<u32>,

    /// 보호기 종류 (breaker/dual_fuse/std_fuse)
    #[arg(long)]
    protection: Option<String>,

    /// NEMA 코드 문자
    #[arg(long)]
    nema: Option<String>,

    /// LRA 추정 생략
    #[arg(long)]
    no_lra: bool,

    /// 설정 파일 경로
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// 디버그 로그 출력
    #[arg(short, long)]
    verbose: bool,
}

/// 프로그램의 엔트리 포인트.
/// 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Interrupted) => {
            println!("\n{}", app::INTERRUPTED_MESSAGE);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("오류: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), AppError> {
    let cfg = config::load_or_default(&cli.config)?;

    let level = if cli.verbose {
        "debug"
    } else {
        cfg.logging.level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    tracing::debug!(config = %cli.config.display(), "config loaded");
    app::install_interrupt_handler()?;

    match (cli.hp, cli.voltage) {
        (Some(hp), Some(voltage)) => {
            let args = OneShotArgs {
                hp,
                voltage,
                protection: cli.protection,
                nema_code: cli.nema,
                skip_lra: cli.no_lra,
            };
            app::run_one_shot(&args, &cfg, &mut io::stdout())
        }
        _ => app::run_interactive(&mut Console::stdio(), &cfg),
    }
}
