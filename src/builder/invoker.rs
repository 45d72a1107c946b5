//! External Maven process invocation.

use std::io;
use std::path::PathBuf;
use std::process::Command;
use thiserror::Error;

/// A single build invocation: one pom file, the goal list and the Maven
/// installation to run it with.
#[derive(Debug, Clone)]
pub struct InvocationRequest {
    pub pom_file: PathBuf,
    pub goals: Vec<String>,
    pub maven_home: PathBuf,
}

/// What came back from the build tool.
#[derive(Debug, Clone, Copy)]
pub struct InvocationResult {
    pub exit_code: i32,
}

impl InvocationResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Error launching the external build process.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("Failed to launch '{program}': {source}")]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Collaborator executing one build invocation synchronously.
///
/// Implemented by [`MavenInvoker`] for real builds; tests substitute fakes
/// to avoid spawning processes.
pub trait Invoker {
    fn invoke(&self, request: &InvocationRequest) -> Result<InvocationResult, InvokeError>;
}

/// Process-backed invoker running `<maven_home>/bin/mvn`.
///
/// The child inherits stdio, so the build log streams straight to the
/// console. The call blocks until the build exits.
#[derive(Debug, Default)]
pub struct MavenInvoker;

impl Invoker for MavenInvoker {
    fn invoke(&self, request: &InvocationRequest) -> Result<InvocationResult, InvokeError> {
        let program = request.maven_home.join("bin").join("mvn");

        let status = Command::new(&program)
            .arg("-f")
            .arg(&request.pom_file)
            .args(&request.goals)
            .status()
            .map_err(|source| InvokeError::Launch {
                program: program.clone(),
                source,
            })?;

        // A signal-terminated child has no exit code; report it as a failure
        Ok(InvocationResult {
            exit_code: status.code().unwrap_or(-1),
        })
    }
}
