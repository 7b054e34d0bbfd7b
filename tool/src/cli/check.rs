use std::path::Path;

use crate::cli::run::load;

/// 실행 없이 구조만 검사한다.
pub fn run(file: &Path) -> Result<(), String> {
    println!("{}", summarize(file)?);
    Ok(())
}

fn summarize(file: &Path) -> Result<String, String> {
    let program = load(file).map_err(|err| err.format(&file.display().to_string()))?;
    Ok(format!(
        "기합! {}: 토큰 {}개, 블록 {}개",
        file.display(),
        program.tokens().len(),
        program.jumps().block_count()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_counts_tokens_and_blocks() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("ok.ak");
        std::fs::write(&path, "아쎄이 여쭤봐도 되겠습니까 필승\n  라이라이 차차차\n받아쓰\n").expect("write");
        let line = summarize(&path).expect("check");
        assert_eq!(line, format!("기합! {}: 토큰 7개, 블록 1개", path.display()));
    }

    #[test]
    fn check_reports_structural_fault_with_code_and_line() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.ak");
        std::fs::write(&path, "라이라이 차차차\n받아쓰\n").expect("write");
        let err = summarize(&path).expect_err("unmatched");
        assert!(err.starts_with(&format!("E_BLOCK_UNMATCHED_CLOSE {}:2", path.display())), "{err}");
    }

    #[test]
    fn check_reports_missing_file() {
        let err = run(Path::new("없는/파일.ak")).expect_err("missing");
        assert!(err.starts_with("E_IO_READ"), "{err}");
    }
}
