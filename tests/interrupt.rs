//! Ctrl-C(SIGINT) 수신 시 안내 문구 출력 후 정상 종료되는지 확인한다.
#![cfg(unix)]

use std::io::Read;
use std::process::{Command, Stdio};

use nec_motor_toolbox::app::INTERRUPTED_MESSAGE;

#[test]
fn sigint_at_prompt_prints_message_and_exits_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut child = Command::new(env!("CARGO_BIN_EXE_nec_motor_toolbox"))
        .arg("--config")
        .arg(dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn cli");

    // 첫 프롬프트가 나올 때까지 읽는다. 이 시점에는 핸들러가 이미 설치되어 있다.
    let mut stdout = child.stdout.take().expect("stdout");
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !String::from_utf8_lossy(&seen).contains("(HP): ") {
        let n = stdout.read(&mut byte).expect("read prompt");
        assert!(n > 0, "cli exited before prompting");
        seen.push(byte[0]);
    }

    let status = Command::new("kill")
        .arg("-INT")
        .arg(child.id().to_string())
        .status()
        .expect("send SIGINT");
    assert!(status.success());

    let mut rest = String::new();
    stdout.read_to_string(&mut rest).expect("read rest");
    let exit = child.wait().expect("wait");
    // stdin 은 핸들 보유 중이라 EOF 경로가 아닌 시그널 경로로 종료된다
    drop(child.stdin.take());

    assert!(exit.success(), "exit={exit:?} out={rest}");
    assert!(rest.contains(INTERRUPTED_MESSAGE), "out={rest}");
}
