use std::process::ExitCode;

fn main() -> ExitCode {
    pls::run()
}
