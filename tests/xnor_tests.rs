// XNOR behavior in both modes, and the exact text the binary prints

use bitlesson::xnor::{bit, to_binary32, xnor, xnor_bits, xnor_scalar, XnorMode, XnorReport};
use std::process::Command;

const SAMPLES: [i32; 10] = [0, 1, -1, 5, 10, 0x5555_5555, -16, 12345, i32::MIN, i32::MAX];

// === SCALAR (shipped) SEMANTICS ===

#[test]
fn test_scalar_shipped_scenario() {
    let report = XnorReport::new(10, 10, XnorMode::Scalar);
    assert_eq!(report.result, 1);
    assert_eq!(
        report.lines(),
        [
            "XNOR of 10 and 10 is: 1".to_string(),
            "Binary representation of result: 00000000000000000000000000000001".to_string(),
        ]
    );
}

#[test]
fn test_scalar_is_equality() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            let expected = if a == b { 1 } else { 0 };
            assert_eq!(xnor_scalar(a, b), expected, "a={} b={}", a, b);

            let rendered = to_binary32(xnor(a, b, XnorMode::Scalar));
            assert_eq!(&rendered[..31], "0".repeat(31));
            assert_eq!(&rendered[31..], if a == b { "1" } else { "0" });
        }
    }
}

#[test]
fn test_scalar_unequal_operands() {
    let report = XnorReport::new(10, 5, XnorMode::Scalar);
    assert_eq!(report.lines()[0], "XNOR of 10 and 5 is: 0");
    assert_eq!(
        report.lines()[1],
        "Binary representation of result: 00000000000000000000000000000000"
    );
}

// === BITWISE SEMANTICS ===

#[test]
fn test_bitwise_equal_operands_are_all_ones() {
    let report = XnorReport::new(10, 10, XnorMode::Bitwise);
    assert_eq!(report.result, -1);
    assert_eq!(to_binary32(report.result), "1".repeat(32));

    for &a in &SAMPLES {
        assert_eq!(xnor_bits(a, a), -1, "a={}", a);
    }
}

#[test]
fn test_bitwise_ten_and_five() {
    // 10 = ...1010, 5 = ...0101: the low four bits all differ
    let result = xnor_bits(10, 5);
    assert_eq!(to_binary32(result), "11111111111111111111111111110000");
    assert_eq!(result, -16);
}

#[test]
fn test_bitwise_no_equal_bits() {
    assert_eq!(xnor_bits(0, -1), 0);
    assert_eq!(xnor_bits(0x5555_5555, 0x5555_5555_u32.wrapping_mul(2) as i32), 0);
}

#[test]
fn test_bitwise_per_bit_equality() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            let r = xnor_bits(a, b);
            for i in 0..32 {
                assert_eq!(bit(r, i), bit(a, i) == bit(b, i), "a={} b={} bit={}", a, b, i);
            }
            assert_eq!(r == -1, a == b);
        }
    }
}

#[test]
fn test_commutative_in_both_modes() {
    for &a in &SAMPLES {
        for &b in &SAMPLES {
            assert_eq!(xnor(a, b, XnorMode::Scalar), xnor(b, a, XnorMode::Scalar));
            assert_eq!(xnor(a, b, XnorMode::Bitwise), xnor(b, a, XnorMode::Bitwise));
        }
    }
}

// === RENDERING ===

#[test]
fn test_binary_rendering_edges() {
    assert_eq!(to_binary32(0), "0".repeat(32));
    assert_eq!(to_binary32(i32::MIN), format!("1{}", "0".repeat(31)));
    assert_eq!(to_binary32(i32::MAX), format!("0{}", "1".repeat(31)));
    assert_eq!(to_binary32(10), "00000000000000000000000000001010");
    for &v in &SAMPLES {
        assert_eq!(to_binary32(v).len(), 32);
    }
}

#[test]
fn test_matching_bits_follow_operands() {
    let report = XnorReport::new(10, 5, XnorMode::Scalar);
    let matching = report.matching_bits();
    assert_eq!(matching.len(), 32);
    assert!(matching[..28].iter().all(|&m| m));
    assert!(matching[28..].iter().all(|&m| !m));
}

#[test]
fn test_display_ends_each_line() {
    let text = XnorReport::new(-3, 7, XnorMode::Bitwise).to_string();
    assert_eq!(text.lines().count(), 2);
    assert!(text.ends_with('\n'));
    assert!(text.starts_with("XNOR of -3 and 7 is: "));
}

// === BINARY ===

fn run_binary(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_bitlesson"))
        .args(args)
        .output()
        .expect("Failed to run bitlesson")
}

#[test]
fn test_binary_default_output() {
    let output = run_binary(&[]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "XNOR of 10 and 10 is: 1\n\
         Binary representation of result: 00000000000000000000000000000001\n"
    );
}

#[test]
fn test_binary_bitwise_operands() {
    let output = run_binary(&["xnor", "10", "5", "--bitwise"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("XNOR of 10 and 5 is: -16"));
    assert!(stdout.contains("11111111111111111111111111110000"));
}

#[test]
fn test_binary_rejects_bad_operand() {
    let output = run_binary(&["xnor", "10", "ten"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid operand"));
}
