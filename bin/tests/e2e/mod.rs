//! Tareas E2E 测试
//!
//! 通过 stdin 驱动真实二进制，覆盖菜单流程与 tareas.txt 持久化

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

// ============== 基础设施 ==============

/// Tareas 二进制调用封装
pub struct TareasCli {
    bin_path: PathBuf,
    work_dir: PathBuf,
}

/// 一次会话的输出
#[derive(Debug)]
pub struct SessionResult {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl TareasCli {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            bin_path: PathBuf::from(env!("CARGO_BIN_EXE_tareas")),
            work_dir: work_dir.to_path_buf(),
        }
    }

    /// 以给定输入运行一次会话
    pub fn session(&self, input: &str) -> SessionResult {
        let mut child = Command::new(&self.bin_path)
            .current_dir(&self.work_dir)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to spawn tareas");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("failed to write stdin");

        let output = child.wait_with_output().expect("failed to wait for tareas");
        SessionResult {
            success: output.status.success(),
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    pub fn data_file(&self) -> PathBuf {
        self.work_dir.join("tareas.txt")
    }
}

// ============== 测试 ==============

#[test]
fn test_exit_option() {
    let dir = TempDir::new().unwrap();
    let result = TareasCli::new(dir.path()).session("6\n");

    assert!(result.success);
    assert_eq!(result.exit_code, Some(0));
    assert!(result.stdout.contains("--- TASK MANAGER ---"));
    assert!(result.stdout.contains("6. Exit"));
    assert!(result.stderr.is_empty());
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let result = TareasCli::new(dir.path()).session("");
    assert!(result.success);
}

#[test]
fn test_export_writes_data_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    let cli = TareasCli::new(dir.path());
    let input = "1\nGroceries\nBuy milk\nLeisure\nfalse\n\
                 1\nReport\nFinish Q3 report\nWork\ntrue\n\
                 3\n1\n4\n6\n";

    let result = cli.session(input);
    assert!(result.success);
    assert!(result.stdout.contains("Tasks exported to tareas.txt"));
    assert_eq!(
        std::fs::read_to_string(cli.data_file()).unwrap(),
        "2,Report,Finish Q3 report,Work,True\n"
    );
}

#[test]
fn test_import_across_sessions() {
    let dir = TempDir::new().unwrap();
    let cli = TareasCli::new(dir.path());
    std::fs::write(cli.data_file(), "2,Report,Finish Q3 report,Work,True\n").unwrap();

    let result = cli.session("5\n1\nGym\nLeg day\npersonal\nfalse\n2\nPersonal\n2\nWork\n6\n");
    assert!(result.success);
    assert!(result.stdout.contains("Tasks imported successfully."));
    assert!(result.stdout.contains(
        "Id: 3, Name: Gym, Description: Leg day, Category: Personal, Priority: Normal"
    ));
    assert!(result.stdout.contains(
        "Id: 2, Name: Report, Description: Finish Q3 report, Category: Work, Priority: High"
    ));
}

#[test]
fn test_import_without_file() {
    let dir = TempDir::new().unwrap();
    let result = TareasCli::new(dir.path()).session("5\n6\n");

    assert!(result.success);
    assert!(result.stdout.contains("File tareas.txt not found."));
}

#[test]
fn test_malformed_file_does_not_crash() {
    let dir = TempDir::new().unwrap();
    let cli = TareasCli::new(dir.path());
    std::fs::write(cli.data_file(), "x,a,b,Work,True\n").unwrap();

    let result = cli.session("5\n6\n");
    assert!(result.success);
    assert!(result.stdout.contains("Import failed: line 1: invalid id 'x'"));
}
