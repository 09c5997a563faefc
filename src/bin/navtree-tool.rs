use std::process::ExitCode;

use clap::Parser;
use navtree::cmd::{run_tool, ToolOpts};
use navtree::logging::init_logging;

fn main() -> ExitCode {
    init_logging();
    let opts = ToolOpts::parse();

    match run_tool(opts) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("navtree-tool: {}", err);
            ExitCode::FAILURE
        }
    }
}
