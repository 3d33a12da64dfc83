use nec_motor_toolbox::app::{self, AppError, OneShotArgs};
use nec_motor_toolbox::config::Config;
use nec_motor_toolbox::motor::{FlcError, GaugeLabel, ProtectionSize, ProtectionType};
use nec_motor_toolbox::report::{size_motor, MotorRequest, SizingError};

fn request(hp: f64, voltage: u32, code: Option<&str>) -> MotorRequest {
    MotorRequest {
        hp,
        voltage,
        protection: ProtectionType::Breaker,
        nema_code: code.map(str::to_string),
    }
}

#[test]
fn report_runs_full_sequence() {
    let report = size_motor(&request(10.0, 230, Some("g"))).expect("report");
    assert!((report.flc_a - 28.0).abs() < 1e-9);
    assert_eq!(report.conductor.as_ref().map(|c| c.gauge), Ok(GaugeLabel::Awg(10)));
    assert_eq!(report.protection, ProtectionSize::Standard(70));
    let lra = report.lra.as_ref().expect("lra");
    assert_eq!(lra.code, "G");
    assert!(lra.known_code);
    assert!((lra.amps - 182.0).abs() < 1e-9);

    let text = report.to_string();
    assert!(text.contains("28.0 A"), "{text}");
    assert!(text.contains("10 AWG"), "{text}");
    assert!(text.contains("70 A"), "{text}");
    assert!(text.contains("182 A"), "{text}");
}

#[test]
fn report_without_nema_code_skips_lra() {
    let report = size_motor(&request(10.0, 460, None)).expect("report");
    assert!(report.lra.is_none());
    assert!(!report.to_string().contains("LRA"));
}

#[test]
fn report_keeps_going_when_conductor_exceeds_table() {
    // 200HP@230V = 480A, 600A 요구 -> 도체 테이블 초과
    let report = size_motor(&request(200.0, 230, Some("Z"))).expect("report");
    assert!(report.conductor.is_err());
    assert_eq!(report.protection, ProtectionSize::Standard(1200));
    let lra = report.lra.as_ref().expect("lra");
    assert!(!lra.known_code);
    assert!((lra.amps - 480.0 * 6.0).abs() < 1e-9);
    assert!(report.to_string().contains("500 kcmil"));
}

#[test]
fn report_fails_on_flc_error() {
    assert_eq!(
        size_motor(&request(10.0, 115, None)),
        Err(SizingError::Flc(FlcError::UnsupportedVoltage(115)))
    );
    assert!(matches!(
        size_motor(&request(0.5, 230, None)),
        Err(SizingError::Flc(FlcError::OutOfRange { .. }))
    ));
}

#[test]
fn one_shot_prints_report() {
    let args = OneShotArgs {
        hp: 100.0,
        voltage: 460,
        protection: Some("dual_fuse".into()),
        nema_code: None,
        skip_lra: false,
    };
    let mut out = Vec::new();
    app::run_one_shot(&args, &Config::default(), &mut out).expect("one-shot");
    let text = String::from_utf8(out).expect("utf8");
    // 124A: 155A 요구 -> 2/0, 124*1.75=217 -> 225, 기본 코드 G -> 806A
    assert!(text.contains("124.0 A"), "{text}");
    assert!(text.contains("2/0 AWG"), "{text}");
    assert!(text.contains("225 A"), "{text}");
    assert!(text.contains("806 A"), "{text}");
}

#[test]
fn one_shot_skip_lra_and_bad_protection() {
    let mut args = OneShotArgs {
        hp: 10.0,
        voltage: 230,
        protection: None,
        nema_code: Some("J".into()),
        skip_lra: true,
    };
    let mut out = Vec::new();
    app::run_one_shot(&args, &Config::default(), &mut out).expect("one-shot");
    assert!(!String::from_utf8(out).expect("utf8").contains("LRA"));

    args.protection = Some("fuse".into());
    let err = app::run_one_shot(&args, &Config::default(), &mut Vec::new())
        .expect_err("unsupported protection type");
    assert!(matches!(err, AppError::Sizing(SizingError::Protection(_))));
}
