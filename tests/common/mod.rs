#![allow(dead_code)]

use assert_cmd::Command;

/// Test helper for running lestconv commands with less boilerplate
pub fn lestconv_command() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("lestconv"))
}
