use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cli;
mod logging;

const DEFAULT_TEST_DIR: &str = "tests";

#[derive(Parser)]
#[command(name = "haebyeong")]
#[command(about = "해병어 실행 도구")]
#[command(version)]
struct Cli {
    /// 실행 로그를 자세히 남긴다 (RUST_LOG가 있으면 그쪽이 우선)
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// .ak 파일을 표준 입출력으로 실행
    Run { file: PathBuf },
    /// 블록 구조만 검사
    Check { file: PathBuf },
    /// 폴더의 .ak/.out(/.in) 짝을 모두 돌려 비교
    Test {
        #[arg(default_value = DEFAULT_TEST_DIR)]
        dir: PathBuf,
        /// 결과 보고서(JSON) 경로
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match cli.command {
        Commands::Run { file } => {
            if let Err(err) = cli::run::run_file(&file) {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
        Commands::Check { file } => {
            if let Err(err) = cli::check::run(&file) {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
        Commands::Test { dir, out } => {
            let mut emit = cli::run::StdoutRunEmitter;
            if let Err(err) = cli::test::run_fixture_dir(&dir, out.as_deref(), &mut emit) {
                eprintln!("{}", err);
                std::process::exit(1);
            }
        }
    }
}
