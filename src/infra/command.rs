//! 命令执行器
//!
//! 提供统一的外部命令执行接口：
//! - stdout/stderr 分离捕获
//! - 非零退出码视为失败，错误中携带 stderr 文本
//! - 按行拆分输出的变体
//!
//! handler 通过 [`CommandExecutor`] trait 调用，测试中可替换为脚本化实现。
//! 子进程没有超时控制，卡住的命令会一直占用当前请求。

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// 命令执行错误
#[derive(Debug)]
pub enum CommandError {
    /// 命令启动失败（程序不存在、无权限等）
    SpawnFailed {
        program: String,
        source: std::io::Error,
    },
    /// 命令以非零状态退出
    Failed {
        program: String,
        code: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

impl CommandError {
    /// 捕获到的 stderr 文本（启动失败时为空）
    pub fn stderr(&self) -> &str {
        match self {
            CommandError::SpawnFailed { .. } => "",
            CommandError::Failed { stderr, .. } => stderr,
        }
    }

    /// 命令自身的输出文本：优先 stderr，其次 stdout，启动失败时为错误描述
    pub fn output_text(&self) -> String {
        match self {
            CommandError::SpawnFailed { .. } => self.to_string(),
            CommandError::Failed { stdout, stderr, .. } => {
                let stderr = stderr.trim();
                if stderr.is_empty() {
                    stdout.trim().to_string()
                } else {
                    stderr.to_string()
                }
            }
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::SpawnFailed { program, source } => {
                write!(f, "failed to start {}: {}", program, source)
            }
            CommandError::Failed {
                program,
                code,
                stderr,
                ..
            } => {
                let stderr = stderr.trim();
                if !stderr.is_empty() {
                    return write!(f, "{}", stderr);
                }
                match code {
                    Some(code) => write!(f, "{} exited with status {}", program, code),
                    None => write!(f, "{} terminated by signal", program),
                }
            }
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::SpawnFailed { source, .. } => Some(source),
            CommandError::Failed { .. } => None,
        }
    }
}

/// 外部命令执行能力
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// 执行命令并等待结束
    ///
    /// 成功（退出码 0）时返回去掉末尾换行的 stdout
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;

    /// 执行命令并按行拆分 stdout
    ///
    /// 失败时原样返回错误，不产生任何行
    async fn run_lines(&self, program: &str, args: &[&str]) -> Result<Vec<String>, CommandError> {
        let stdout = self.run(program, args).await?;
        Ok(split_lines(&stdout))
    }
}

/// 真实的子进程执行器
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

#[async_trait]
impl CommandExecutor for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        debug!(program, ?args, "Running command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|source| CommandError::SpawnFailed {
                program: program.to_string(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            debug!(program, code = ?output.status.code(), stderr = %stderr.trim(), "Command failed");
            return Err(CommandError::Failed {
                program: program.to_string(),
                code: output.status.code(),
                stdout,
                stderr,
            });
        }

        Ok(stdout.trim_end_matches(['\n', '\r']).to_string())
    }
}

/// 按换行拆分输出，去掉首尾空白；空输出得到空列表
pub fn split_lines(output: &str) -> Vec<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('\n').map(|line| line.to_string()).collect()
}
