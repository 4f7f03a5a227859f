use std::process::ExitCode;

fn main() -> ExitCode {
    match repo_ref::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            repo_ref::ui::output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
