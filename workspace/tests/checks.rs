#![allow(missing_docs, reason = "this is a test crate")]

use std::process::Command;
use std::str::FromStr;

use camino::Utf8Path;
use cargo_metadata::{Metadata, MetadataCommand, Package};
use libtest_mimic::Trial;

/// Bare-metal target every `workspace-checks.thumb` package must build for.
///
/// ARMv7-M is the smallest architecture with an ITM.
const THUMB_TARGET: &str = "thumbv7m-none-eabi";

trait CommandExt {
    /// Runs a command, maybe capturing output from it and returning as `Failed`.
    fn run_as_test(&mut self, capture: bool) -> Result<(), libtest_mimic::Failed>;
}

impl CommandExt for std::process::Command {
    fn run_as_test(&mut self, capture: bool) -> Result<(), libtest_mimic::Failed> {
        let (status, stdout, stderr) = if capture {
            let output = self.output()?;

            let stdout = String::from_utf8(output.stdout)?;
            let stderr = String::from_utf8(output.stderr)?;

            (output.status, stdout, stderr)
        } else {
            (self.status()?, String::new(), String::new())
        };

        status.success().then_some(()).ok_or_else(|| {
            let mut message = format!("Running {self:?} {status}");

            if !stdout.is_empty() {
                message.push_str("\n==== stdout ====\n");
                message.push_str(&stdout);
            }
            if !stderr.is_empty() {
                message.push_str("\n==== stderr ====\n");
                message.push_str(&stderr);
            }

            message.into()
        })
    }
}

fn get_workspace_lints(manifest: &toml::Table) -> Option<bool> {
    manifest.get("lints")?.get("workspace")?.as_bool()
}

/// Reads a boolean `package.metadata.workspace-checks.<name>` flag.
fn workspace_check(package: &Package, name: &str) -> Option<bool> {
    package
        .metadata
        .pointer(&format!("/workspace-checks/{name}"))
        .and_then(|flag| flag.as_bool())
}

/// Creates trials for the various checks we want to run for each `package` in the workspace.
fn make_package_trials(
    base: &Utf8Path,
    package: &Package,
    workspace_packages: &[&Package],
    capture: bool,
) -> Vec<Trial> {
    let dir = package.manifest_path.parent().unwrap();
    let package_relative = dir.strip_prefix(base).unwrap();
    let relative = format_args!("itm_log::{package_relative}");

    let mut trials = vec![
        Trial::test(format!("{relative}::workspace-lints"), {
            let manifest_path = package.manifest_path.to_owned();
            move || {
                let text = std::fs::read_to_string(&manifest_path)?;
                let manifest = toml::Table::from_str(&text)?;
                get_workspace_lints(&manifest)
                    .unwrap_or(false)
                    .then_some(())
                    .ok_or_else(|| "Missing `workspace.lints = true`".into())
            }
        }),
        Trial::test(format!("{relative}::description"), {
            let description = package.description.clone();
            move || {
                description
                    .filter(|description| !description.is_empty())
                    .map(|_| ())
                    .ok_or_else(|| "Missing `package.description`".into())
            }
        }),
        // Run `cargo fmt` per crate to include which crate failed the formatting check in the test summary.
        Trial::test(format!("{relative}::fmt"), {
            let dir = dir.to_owned();
            move || {
                Command::new("cargo")
                    .args(["fmt", "--check"])
                    .current_dir(dir)
                    .run_as_test(capture)
            }
        }),
    ];

    if workspace_check(package, "miri").unwrap_or(true) {
        trials.push(
            Trial::test(format!("{relative}::miri"), {
                let dir = dir.to_owned();
                move || {
                    Command::new("cargo")
                        .args(["miri", "test"])
                        .current_dir(dir)
                        .run_as_test(capture)
                }
            })
            .with_ignored_flag(true),
        );
    }

    // Packages meant for firmware must keep building without `std`.
    if workspace_check(package, "thumb").unwrap_or(false) {
        trials.push(
            Trial::test(format!("{relative}::thumb"), {
                let dir = base.to_owned();
                let package_name = package.name.to_string();
                move || {
                    Command::new("cargo")
                        .args(["build", "--target", THUMB_TARGET, "-p", &package_name])
                        .current_dir(dir)
                        .run_as_test(capture)
                }
            })
            .with_ignored_flag(true),
        );
    }

    // Run doc-tests for each crate as `nextest` does not include them itself.
    if package.targets.iter().any(|target| target.is_lib()) {
        trials.push(Trial::test(format!("{relative}::doc-test"), {
            let dir = base.to_owned();
            let package_name = package.name.to_string();
            move || {
                Command::new("cargo")
                    .args(["test", "--doc", "-p", &package_name])
                    .current_dir(dir)
                    .run_as_test(capture)
            }
        }));
    }

    // A publishable package (`package.publish.is_none()`) must not depend on non-publishable packages.
    if package.publish.is_none() {
        let unpublishable_dependencies: Vec<String> = package
            .dependencies
            .iter()
            .filter(|dependency| {
                workspace_packages.iter().any(|workspace_package| {
                    *workspace_package.name == dependency.name
                        && workspace_package.publish.is_some()
                })
            })
            .map(|dependency| dependency.name.clone())
            .collect();

        trials.push(Trial::test(format!("{relative}::publishable"), move || {
            if unpublishable_dependencies.is_empty() {
                Ok(())
            } else {
                Err(format!("has non-publish dependencies: {unpublishable_dependencies:?}").into())
            }
        }));
    }

    trials
}

/// Creates trials for the `cargo` checks we want to run for the whole workspace.
fn make_workspace_trials(workspace: &Metadata, capture: bool) -> Vec<Trial> {
    let workspace_directory = &workspace.workspace_root;

    vec![
        Trial::test("itm_log::clippy", {
            let dir = workspace_directory.to_owned();
            move || {
                Command::new("cargo")
                    .args([
                        "clippy",
                        "--all-targets",
                        "--workspace",
                        "--all-features",
                        "--color=always",
                        "--keep-going",
                        "--",
                        "-Dwarnings",
                    ])
                    .current_dir(dir)
                    .run_as_test(capture)
            }
        }),
        Trial::test("itm_log::doc", {
            let dir = workspace_directory.to_owned();
            move || {
                Command::new("cargo")
                    .args([
                        "doc",
                        "--no-deps",
                        "--workspace",
                        "--all-features",
                        "--color=always",
                        "--keep-going",
                    ])
                    .env("RUSTDOCFLAGS", "-Dwarnings --document-private-items")
                    .current_dir(dir)
                    .run_as_test(capture)
            }
        }),
    ]
}

/// Gets the package definitions for all members of the workspace.
fn workspace_packages(metadata: &Metadata) -> impl Iterator<Item = &Package> {
    metadata
        .workspace_members
        .iter()
        .map(|id| metadata.packages.iter().find(|p| &p.id == id).unwrap())
}

fn main() -> std::process::ExitCode {
    let args = libtest_mimic::Arguments::from_args();
    let capture = !args.nocapture;

    let manifest_dir = Utf8Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap();

    let workspace = MetadataCommand::new()
        .manifest_path(manifest_dir.join("Cargo.toml"))
        .exec()
        .unwrap();

    // Skipped in coverage runs.
    let trials: Vec<Trial> = if cfg!(coverage) {
        vec![]
    } else {
        let packages: Vec<&Package> = workspace_packages(&workspace).collect();
        let mut trials = make_workspace_trials(&workspace, capture);
        for package in &packages {
            trials.extend(make_package_trials(
                manifest_dir,
                package,
                &packages,
                capture,
            ));
        }
        trials
    };

    libtest_mimic::run(&args, trials).exit_code()
}
