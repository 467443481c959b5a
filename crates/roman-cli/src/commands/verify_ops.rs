use std::process::ExitCode;

use roman_core::{integer_to_roman, roman_to_integer, ErrorKind, MAX_VALUE, MIN_VALUE};
use serde::Serialize;

/// Scannable strings that are not canonical numerals.
pub const NON_CANONICAL: &[&str] = &[
    "IM", "VX", "IIII", "IXIX", "MMMM", "VV", "LL", "DD", "LC", "XM", "IL", "IC", "XXXX", "CCCC",
    "VIV", "IIV", "CMCM", "XCXC", "DCD", "MCMC",
];

#[derive(Debug, Serialize)]
pub struct VerifyFailure {
    pub case: String,
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyReport {
    pub round_trips: usize,
    pub rejections: usize,
    pub failures: Vec<VerifyFailure>,
}

impl VerifyReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Round-trip every value in range and check every non-canonical string is
/// rejected as malformed.
pub fn run_verify() -> VerifyReport {
    let mut report = VerifyReport {
        round_trips: 0,
        rejections: 0,
        failures: Vec::new(),
    };

    for n in MIN_VALUE..=MAX_VALUE {
        report.round_trips += 1;
        let roman = match integer_to_roman(i64::from(n)) {
            Ok(r) => r,
            Err(e) => {
                report.failures.push(VerifyFailure {
                    case: n.to_string(),
                    detail: e.to_string(),
                });
                continue;
            }
        };
        match roman_to_integer(&roman) {
            Ok(back) if back == n => {}
            other => report.failures.push(VerifyFailure {
                case: format!("{n} -> {roman}"),
                detail: format!("decoded as {other:?}"),
            }),
        }
    }

    for &s in NON_CANONICAL {
        report.rejections += 1;
        match roman_to_integer(s) {
            Err(e) if e.kind() == ErrorKind::InvalidFormat => {}
            other => report.failures.push(VerifyFailure {
                case: s.to_string(),
                detail: format!("expected InvalidFormat, got {other:?}"),
            }),
        }
    }

    report
}

pub fn verify_cmd(json: bool) -> ExitCode {
    let report = run_verify();
    if json {
        let s = die!(
            serde_json::to_string_pretty(&report),
            "Error serializing report: {}"
        );
        println!("{s}");
    } else {
        for f in &report.failures {
            println!("FAIL  {}: {}", f.case, f.detail);
        }
        println!(
            "round-trips: {}, rejections: {}, failures: {}",
            report.round_trips,
            report.rejections,
            report.failures.len()
        );
    }
    if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
