pub mod check;
pub mod run;

use std::fs;
use std::path::Path;

pub fn read_text(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| e.to_string())
}
