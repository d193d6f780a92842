//! boxpack - compile the application into one executable, then box it.
//!
//! Exit code is the pipeline's: 0 on success, the failing tool's code, or 1 for a missing tool.

use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let exit_code = match boxpack::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };

    process::exit(exit_code);
}
