use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert!(v["winner"].is_string() || v["status"] == "Tied");
    assert_eq!(v["board"].as_array().map(|b| b.len()), Some(3));
    let moves = v["moves"].as_u64().unwrap();
    assert!((5..=9).contains(&moves));
}

#[test]
fn sim_binary_is_deterministic() {
    let run = || {
        Command::new(env!("CARGO_BIN_EXE_sim"))
            .args(["11", "12", "4"])
            .output()
            .expect("failed to run sim binary")
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn sim_binary_rejects_negative_size() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["1", "2", "-3"])
        .output()
        .expect("failed to run sim binary");
    assert!(!output.status.success());
}
