//! Example demonstrating the attribute-driven suite runner.
//!
//! Run with:
//!   cargo run --example suite -p mirror

use mirror::{Failure, MirrorResult, Outcome, run, suite};

#[derive(Default)]
struct Arithmetic {
    scratch: i64,
}

#[suite]
impl Arithmetic {
    #[setup]
    fn reset(&mut self) -> Outcome {
        self.scratch = 0;
        Ok(())
    }

    #[case]
    fn one_plus_one_is_two(&mut self) -> Outcome {
        self.scratch = 1 + 1;
        if self.scratch == 2 {
            Ok(())
        } else {
            Err(Failure::new("assertion"))
        }
    }

    #[case(expected = "overflow")]
    fn adding_past_max_overflows(&mut self) -> Outcome {
        match i64::MAX.checked_add(1) {
            Some(total) => {
                self.scratch = total;
                Ok(())
            }
            None => Err(Failure::new("overflow")),
        }
    }

    #[case]
    fn success_is_eight_letters(&mut self) -> Outcome {
        if "success".len() == 8 {
            Ok(())
        } else {
            Err(Failure::with_detail("assertion", "length is 7"))
        }
    }

    #[teardown]
    fn clear(&mut self) -> Outcome {
        self.scratch = 0;
        Ok(())
    }
}

fn main() -> MirrorResult<()> {
    let results = run(&mut Arithmetic::default())?;
    for result in &results {
        let verdict = if result.passed { "ok" } else { "FAILED" };
        println!("{:<28} {:>6} ({:?})", result.name, verdict, result.elapsed);
    }
    Ok(())
}
