//! Stavlog main entrypoint.

use stavlog::run;
use stavlog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(e);
        std::process::exit(1);
    }
}
