//! Sequential build orchestration.

use std::path::Path;
use std::time::Instant;

use crate::builder::invoker::{InvocationRequest, Invoker};
use crate::builder::report::{BuildReport, Outcome};
use crate::cleaner;
use crate::config::Config;
use crate::error::ShepherdError;

/// Result of one orchestration run: a report entry for every processed
/// module, plus the failure that cut the run short when fail-fast was
/// configured.
#[derive(Debug)]
pub struct RunOutcome {
    pub report: BuildReport,
    pub aborted: Option<ShepherdError>,
}

/// Runs the configured modules in order through an [`Invoker`], one at a
/// time, and records how each build went.
pub struct BuildOrchestrator<'a, I: Invoker> {
    config: &'a Config,
    invoker: I,
}

impl<'a, I: Invoker> BuildOrchestrator<'a, I> {
    pub fn new(config: &'a Config, invoker: I) -> Self {
        Self { config, invoker }
    }

    /// Prune the local repository when enabled, then build every configured
    /// module in order.
    ///
    /// The report always covers the modules processed so far, also when a
    /// fail-fast abort stops the loop; the caller prints it before
    /// propagating the failure.
    pub fn run(&self) -> RunOutcome {
        self.prune_local_repository();
        self.execute_builds()
    }

    fn prune_local_repository(&self) {
        let repo = self.config.local_repository();
        if repo.enable {
            tracing::info!("Pruning local repository {}", repo.path);
            cleaner::prune(Path::new(&repo.path), repo.max_age_files);
        }
    }

    fn execute_builds(&self) -> RunOutcome {
        let mut report = BuildReport::new();
        let maven_home = self.config.maven_home();

        for module in self.config.modules() {
            let request = InvocationRequest {
                pom_file: module.pom_file.clone(),
                goals: self.config.goals().to_vec(),
                maven_home: maven_home.clone(),
            };

            tracing::info!("Building module {} ({})", module.name, module.pom_file.display());

            let start = Instant::now();
            let failure = match self.invoker.invoke(&request) {
                Ok(result) if result.is_success() => None,
                Ok(result) => Some(format!("exit code {}", result.exit_code)),
                Err(e) => Some(e.to_string()),
            };
            let elapsed = start.elapsed();

            match failure {
                None => report.record(module.name.as_str(), Outcome::Ok, elapsed),
                Some(reason) => {
                    report.record(module.name.as_str(), Outcome::Failure, elapsed);

                    if self.config.fail_fast() {
                        return RunOutcome {
                            report,
                            aborted: Some(ShepherdError::BuildFailed {
                                module: module.name,
                                reason,
                            }),
                        };
                    }

                    tracing::error!("Build of module {} failed ({}), continuing", module.name, reason);
                }
            }
        }

        RunOutcome {
            report,
            aborted: None,
        }
    }
}
