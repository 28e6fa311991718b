//! MongoDB user-management configuration.

use std::path::PathBuf;

use auxprobe_mongo::{DEFAULT_SHELL, ManageUserParams};
use clap::{Args, Subcommand};

use crate::TRACING_TARGET_CONFIG;

/// Arguments of the `mongo` subcommand.
#[derive(Debug, Clone, Args)]
pub struct MongoArgs {
    #[command(subcommand)]
    pub action: MongoAction,
}

/// User-management operations.
#[derive(Debug, Clone, Subcommand)]
pub enum MongoAction {
    /// Print the rendered script without running it.
    Render(ManageUserParams),
    /// Render the script and run it through the shell.
    Apply(ApplyArgs),
}

/// Arguments of `mongo apply`.
#[derive(Debug, Clone, Args)]
pub struct ApplyArgs {
    /// Script parameters.
    #[command(flatten)]
    pub params: ManageUserParams,

    /// mongosh-compatible binary used to run the script.
    #[arg(long = "mongo-shell", env = "MONGO_SHELL", default_value = DEFAULT_SHELL)]
    pub shell: PathBuf,
}

impl MongoAction {
    /// Returns the script parameters.
    pub fn params(&self) -> &ManageUserParams {
        match self {
            Self::Render(params) => params,
            Self::Apply(args) => &args.params,
        }
    }
}

impl MongoArgs {
    /// Logs the configuration with the passwords masked.
    pub fn log(&self) {
        let params = self.action.params();
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            uri = %params.connection_uri_masked(),
            database = %params.database,
            mode = %params.mode,
            subject = %params.subject,
            shell = ?match &self.action {
                MongoAction::Apply(args) => Some(args.shell.display().to_string()),
                MongoAction::Render(_) => None,
            },
            "MongoDB configuration"
        );
    }
}
