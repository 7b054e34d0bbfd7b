use std::io::{self, Write};
use std::path::{Path, PathBuf};

use haebyeong_lang::{Fault, Interpreter};
use tracing::{debug, info};

use crate::cli::read_text;

#[derive(Debug)]
pub enum RunError {
    Fault(Fault),
    Io { path: PathBuf, message: String },
}

impl RunError {
    pub fn code(&self) -> &'static str {
        match self {
            RunError::Fault(fault) => fault.code(),
            RunError::Io { .. } => "E_IO_READ",
        }
    }

    pub fn format(&self, file: &str) -> String {
        match self {
            RunError::Fault(fault) => format!("{} {}:{} {}", self.code(), file, fault.line(), fault),
            RunError::Io { path, message } => {
                format!("{} {}: 파일을 열 수 없다 ({})", self.code(), path.display(), message)
            }
        }
    }
}

impl From<Fault> for RunError {
    fn from(fault: Fault) -> Self {
        RunError::Fault(fault)
    }
}

pub trait RunEmitSink {
    fn out(&mut self, line: &str);
    fn err(&mut self, line: &str);
}

pub struct StdoutRunEmitter;

impl RunEmitSink for StdoutRunEmitter {
    fn out(&mut self, line: &str) {
        println!("{}", line);
    }

    fn err(&mut self, line: &str) {
        eprintln!("{}", line);
    }
}

pub fn load(path: &Path) -> Result<Interpreter, RunError> {
    let source = read_text(path).map_err(|message| RunError::Io {
        path: path.to_path_buf(),
        message,
    })?;
    let program = Interpreter::new(&source)?;
    debug!(file = %path.display(), tokens = program.tokens().len(), "프로그램 적재");
    Ok(program)
}

fn emit_fault(out: &mut dyn Write, fault: &Fault) -> io::Result<()> {
    writeln!(out, "\n{}", fault)?;
    out.flush()
}

/// 파일을 실행한다. 오류가 나면 stdout에 진단을 한 줄 띄워 찍고, 코드가 붙은 요약을 돌려준다.
pub fn run_file(path: &Path) -> Result<(), String> {
    let file = path.display().to_string();
    let result = load(path).and_then(|program| program.run().map(|_| ()).map_err(RunError::from));
    match result {
        Ok(()) => {
            info!(file = %file, "실행 완료");
            Ok(())
        }
        Err(RunError::Fault(fault)) => {
            let emitted = emit_fault(&mut io::stdout().lock(), &fault);
            let summary = RunError::Fault(fault).format(&file);
            match emitted {
                Ok(()) => Err(summary),
                Err(err) => Err(format!("{} (진단 출력 실패: {})", summary, err)),
            }
        }
        Err(err) => Err(err.format(&file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_error_format_includes_code_file_and_line() {
        let err = RunError::from(Fault::UnmatchedClose { line: 3 });
        let text = err.format("a.ak");
        assert!(text.starts_with("E_BLOCK_UNMATCHED_CLOSE a.ak:3 [줄 3]"));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "닫힌 파이프"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn emit_fault_writes_blank_line_then_diagnostic() {
        let mut out = Vec::new();
        emit_fault(&mut out, &Fault::UnmatchedClose { line: 2 }).expect("emit");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("\n[줄 2]"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn emit_fault_propagates_write_failure() {
        let err = emit_fault(&mut BrokenPipe, &Fault::UnmatchedClose { line: 2 }).expect_err("broken");
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Path::new("없는/파일.ak")).expect_err("missing");
        assert_eq!(err.code(), "E_IO_READ");
    }

    #[test]
    fn load_surfaces_structural_fault() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.ak");
        std::fs::write(&path, "받아쓰\n").expect("write");
        match load(&path) {
            Err(RunError::Fault(fault)) => assert_eq!(fault, Fault::UnmatchedClose { line: 1 }),
            other => panic!("unexpected: {:?}", other.map(|_| ())),
        }
    }
}
