use std::process::Command;

fn probe() -> Command {
    Command::new(env!("CARGO_BIN_EXE_image-size-probe"))
}

/// 必須の位置引数が足りない場合、ネットワークに触れる前に使い方を表示して失敗する
#[test]
fn missing_positional_prints_usage_and_fails() {
    let output = probe().arg("only-one").output().expect("バイナリの起動に失敗");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
    assert!(stderr.contains("<ARG2>"), "stderr: {}", stderr);
    assert!(output.stdout.is_empty());
}

#[test]
fn no_arguments_fails() {
    let output = probe().output().expect("バイナリの起動に失敗");
    assert!(!output.status.success());
}

#[test]
fn help_lists_every_argument() {
    let output = probe().arg("--help").output().expect("バイナリの起動に失敗");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("This is argument one"));
    assert!(stdout.contains("This is argument two"));
    assert!(stdout.contains("--optional <OPTIONAL>"));
}
