use std::process::ExitCode;

use conformance::run_all;

fn main() -> ExitCode {
    let outcomes = run_all();
    let mut passed = 0_usize;
    let mut failed = 0_usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(()) => passed += 1,
            Err(message) => {
                failed += 1;
                eprintln!("FAIL {}: {message}", outcome.name);
            }
        }
    }
    println!("{passed} passed, {failed} failed");
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
