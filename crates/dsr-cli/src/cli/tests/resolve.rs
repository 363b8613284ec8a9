//! Tests for `resolve`.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use dsr_core::source::SourceCategory;

#[test]
fn cli_parse_resolve() {
    match parse(&["dsr", "resolve", "/flu/ha"]) {
        CliCommand::Resolve {
            path,
            json_type,
            source,
        } => {
            assert_eq!(path, "/flu/ha");
            assert!(json_type.is_none());
            assert!(source.is_none());
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_type_and_source() {
    match parse(&[
        "dsr", "resolve", "/local/zika", "--type", "tree", "--source", "local",
    ]) {
        CliCommand::Resolve {
            path,
            json_type,
            source,
        } => {
            assert_eq!(path, "/local/zika");
            assert_eq!(json_type.as_deref(), Some("tree"));
            assert_eq!(source, Some(SourceCategory::Local));
        }
        _ => panic!("expected Resolve with --type and --source"),
    }
}

#[test]
fn cli_parse_resolve_community_alias() {
    match parse(&["dsr", "resolve", "/community/org/repo", "--source", "community"]) {
        CliCommand::Resolve { source, .. } => assert_eq!(source, Some(SourceCategory::Github)),
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_resolve_rejects_unknown_source() {
    assert!(Cli::try_parse_from(["dsr", "resolve", "/x", "--source", "ftp"]).is_err());
}
