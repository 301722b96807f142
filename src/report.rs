//! Terminal output for a finished task.

use std::path::Path;

const HEAVY_RULE: &str = "============================================================";
const LIGHT_RULE: &str = "------------------------------------------------------------";

/// Print the JSON result under a `RESULT:` banner.
pub fn print_result(json: &str) {
    println!("\n{HEAVY_RULE}\nRESULT:\n{HEAVY_RULE}\n{json}");
}

/// Note where the JSON result went instead of printing it.
pub fn print_written(path: &Path) {
    println!("\n[herald] Result written to: {}", path.display());
}

/// Print the chat notification block.
pub fn print_message(message: &str) {
    println!("\n[herald] Discord Message:\n{LIGHT_RULE}\n{message}");
}
