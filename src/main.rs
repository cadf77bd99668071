//! rWorkflow main entrypoint.

use rworkflow::run;
use rworkflow::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
