use std::process::ExitCode;

fn main() -> ExitCode {
    match load_tester::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
