use anyhow::Context;
use auxprobe_mongo::{MongoScript, MongoShell, MongoUserProbe};

use crate::config::{MongoAction, MongoArgs};
use crate::output::Output;

/// Prints or applies the user-management script.
pub(super) async fn run(args: MongoArgs, output: &Output) -> anyhow::Result<()> {
    match args.action {
        MongoAction::Render(params) => {
            let script = MongoScript::render(&params).context("failed to render script")?;
            output.text(script.as_str())
        }
        MongoAction::Apply(apply) => {
            let probe = MongoUserProbe::new(apply.params, MongoShell::new(apply.shell));
            super::run_probe(&probe, output).await
        }
    }
}
