use std::process::Command;

#[test]
fn sim_binary_smoke() {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(["--difficulty", "easy", "--games", "20", "--seed", "3"])
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let v: serde_json::Value = serde_json::from_str(stdout.trim()).expect("invalid json");
    assert_eq!(v["difficulty"], "easy");
    assert_eq!(v["games"], 20);
    assert_eq!(
        v["wins"].as_u64().unwrap() + v["losses"].as_u64().unwrap(),
        20
    );
}
