//! Probe that applies the user-management script.

use async_trait::async_trait;
use auxprobe_core::Probe;
use serde::Serialize;

use crate::{Error, ManageUserParams, MongoScript, MongoShell, Result, UserMode};

/// Result of an applied user-management script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageUserReport {
    /// Mode the script ran in.
    pub mode: UserMode,
    /// Database the subject owns.
    pub database: String,
    /// User that was created or dropped.
    pub subject: String,
    /// Standard output of the shell.
    pub output: String,
}

/// Renders the user-management script and runs it through a shell.
#[derive(Debug, Clone)]
pub struct MongoUserProbe {
    params: ManageUserParams,
    shell: MongoShell,
}

impl MongoUserProbe {
    /// Creates a probe for the given parameters and shell.
    pub fn new(params: ManageUserParams, shell: MongoShell) -> Self {
        Self { params, shell }
    }

    /// Returns the script parameters.
    #[inline]
    pub fn params(&self) -> &ManageUserParams {
        &self.params
    }

    /// Renders the script without running it.
    pub fn render(&self) -> Result<MongoScript> {
        MongoScript::render(&self.params)
    }

    /// Renders and runs the script.
    ///
    /// # Errors
    ///
    /// Invalid parameters are rejected before the shell is started.
    pub async fn apply(&self) -> Result<ManageUserReport> {
        let script = self.render()?;
        let output = self.shell.run(&script).await?;

        Ok(ManageUserReport {
            mode: script.mode(),
            database: self.params.database.clone(),
            subject: self.params.subject.clone(),
            output: output.stdout.trim_end().to_owned(),
        })
    }
}

#[async_trait]
impl Probe for MongoUserProbe {
    type Error = Error;
    type Output = ManageUserReport;

    fn name(&self) -> &'static str {
        "mongo"
    }

    async fn run(&self) -> Result<Self::Output, Self::Error> {
        self.apply().await
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn params() -> ManageUserParams {
        ManageUserParams::new("admin", "pw", "alice", UserMode::Create, "alice").with_auth("secret")
    }

    #[test]
    fn test_probe_name() {
        let probe = MongoUserProbe::new(params(), MongoShell::default());
        assert_eq!(probe.name(), "mongo");
        assert_eq!(probe.render().unwrap().mode(), UserMode::Create);
    }

    #[tokio::test]
    async fn test_invalid_params_skip_shell() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("ran");

        // The shell would leave a marker behind if it were started.
        let stub = dir.path().join("stub.sh");
        std::fs::write(&stub, format!("touch {}\n", marker.display())).unwrap();
        let shell = MongoShell::new("/bin/sh").with_args([stub.into_os_string()]);

        let params = ManageUserParams::new("admin", "pw", "alice", UserMode::Create, "alice");
        let err = MongoUserProbe::new(params, shell).run().await.unwrap_err();

        assert!(err.is_rejected_input());
        assert!(!marker.exists());
    }

    #[tokio::test]
    async fn test_apply_reports_output() {
        let dir = tempfile::tempdir().unwrap();
        let stub = dir.path().join("stub.sh");
        std::fs::write(&stub, "echo '{ acknowledged: true }'\n").unwrap();
        let shell = MongoShell::new("/bin/sh").with_args([stub.into_os_string()]);

        let report = MongoUserProbe::new(params(), shell).apply().await.unwrap();
        assert_eq!(report.mode, UserMode::Create);
        assert_eq!(report.subject, "alice");
        assert_eq!(report.output, "{ acknowledged: true }");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["mode"], "create");
        assert_eq!(json["database"], "alice");
    }
}
