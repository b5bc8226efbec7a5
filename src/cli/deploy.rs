//! Deploy pipeline: build, then git commit/push, then the hosting CLI.
//!
//! The git stage is best-effort: `git commit` legitimately fails when
//! there is nothing to commit, so each sub-step's failure is logged as a
//! warning and the pipeline continues. The build and hosting stages abort
//! with a non-zero exit.

use super::build::build_site;
use crate::{
    config::Paths,
    log,
    utils::exec::Cmd,
};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Fixed commit message for the version-control stage.
const COMMIT_MESSAGE: &str = "Update portfolio";

/// Hosting platform CLI invoked for the final stage.
const DEPLOY_COMMAND: &str = "vercel";

/// Run the full pipeline: build → git add/commit/push → hosting deploy.
pub fn deploy_site(paths: &Paths, no_git: bool) -> Result<()> {
    build_site(paths).context("build failed, fix config.json and try again")?;

    if no_git {
        log!("deploy"; "skipping git stage (--no-git)");
    } else {
        git_stage(&paths.root);
    }

    deploy_stage(&paths.root)?;
    log!("deploy"; "portfolio is updated and live");
    Ok(())
}

/// Stage all changes, commit, push. Failures are warnings only.
fn git_stage(root: &Path) {
    let steps: [&[&str]; 3] = [&["add", "."], &["commit", "-m", COMMIT_MESSAGE], &["push"]];
    for args in steps {
        if let Err(e) = Cmd::new("git").args(args).cwd(root).run() {
            log!("git"; "warning: {e} (continuing)");
        }
    }
}

/// Invoke the hosting platform CLI. A failure aborts the pipeline.
fn deploy_stage(root: &Path) -> Result<()> {
    if which::which(DEPLOY_COMMAND).is_err() {
        bail!("`{DEPLOY_COMMAND}` not found in PATH, install it with `npm i -g {DEPLOY_COMMAND}`");
    }

    if let Err(e) = Cmd::new(DEPLOY_COMMAND)
        .args(["--prod", "--yes"])
        .cwd(root)
        .run()
    {
        bail!("deploy failed: {e}\nrun `{DEPLOY_COMMAND} login` if your session expired");
    }
    Ok(())
}
