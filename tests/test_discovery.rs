//! Integration tests for repository discovery and status collection

mod common;

use common::{clone_repo, corrupt_index, create_test_commit, is_git_available, setup_git_repo};
use git_audit::core::{find_repo_roots, scan};
use git_audit::git::{Flag, RepositoryStatus};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_finds_repos_at_every_depth_within_limit() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();
    let shallow = root.join("shallow");
    let deep = root.join("group").join("team").join("deep");
    setup_git_repo(&shallow).expect("Failed to setup shallow repo");
    setup_git_repo(&deep).expect("Failed to setup deep repo");

    // deep/.git only becomes visible once group/team/deep itself is listed
    assert_eq!(find_repo_roots(root, 3), vec![deep.clone(), shallow.clone()]);
    assert_eq!(find_repo_roots(root, 2), vec![shallow.clone()]);
    assert_eq!(find_repo_roots(root, 1), vec![shallow.clone()]);
    assert!(find_repo_roots(root, 0).is_empty());
    assert_eq!(find_repo_roots(root, 10), vec![deep, shallow]);
}

#[test]
fn test_skips_plain_directories_and_files() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();
    fs::create_dir_all(root.join("docs").join("images")).expect("Failed to create dirs");
    fs::write(root.join("README.md"), "# not a repo").expect("Failed to write file");

    assert!(find_repo_roots(root, 5).is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directories_are_not_followed() {
    use std::os::unix::fs::symlink;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let outside = TempDir::new().expect("Failed to create second temp directory");
    fs::create_dir_all(outside.path().join("linked").join(".git")).expect("Failed to create marker");

    let link = temp_dir.path().join("link");
    if symlink(outside.path().join("linked"), &link).is_ok() {
        assert!(find_repo_roots(temp_dir.path(), 3).is_empty());
    }
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_does_not_abort_scan() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();
    let locked = root.join("a-locked");
    fs::create_dir_all(locked.join("hidden").join(".git")).expect("Failed to create marker");
    fs::create_dir_all(root.join("b-open").join(".git")).expect("Failed to create marker");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).expect("Failed to chmod");

    // Privileged users can still list a 0o000 directory
    let locked_is_unreadable = fs::read_dir(&locked).is_err();
    let roots = find_repo_roots(root, 3);

    // Restore so TempDir can clean up
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).expect("Failed to chmod");

    assert!(roots.contains(&root.join("b-open")));
    if locked_is_unreadable {
        assert_eq!(roots, vec![root.join("b-open")]);
    } else {
        assert_eq!(roots, vec![locked.join("hidden"), root.join("b-open")]);
    }
}

#[tokio::test]
async fn test_scan_reports_each_repository_state() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path();

    // Upstream with one commit, kept outside the scanned tree
    let upstream_dir = TempDir::new().expect("Failed to create upstream directory");
    let upstream = upstream_dir.path().join("upstream");
    setup_git_repo(&upstream).expect("Failed to setup upstream");
    create_test_commit(&upstream, "README.md", "# upstream", "Initial commit")
        .expect("Failed to commit");

    // a-clean: an untouched clone
    let clean = root.join("a-clean");
    clone_repo(&upstream, &clean).expect("Failed to clone clean repo");

    // b-ahead: a clone with a local commit and a modified file
    let ahead = root.join("b-ahead");
    clone_repo(&upstream, &ahead).expect("Failed to clone ahead repo");
    create_test_commit(&ahead, "local.txt", "local", "Local work").expect("Failed to commit");
    fs::write(ahead.join("README.md"), "# changed").expect("Failed to modify file");

    // c-local: no upstream, one untracked file
    let local = root.join("c-local");
    setup_git_repo(&local).expect("Failed to setup local repo");
    create_test_commit(&local, "a.txt", "a", "Initial commit").expect("Failed to commit");
    fs::write(local.join("scratch.txt"), "scratch").expect("Failed to write file");

    // d-broken: git status fails
    let broken = root.join("d-broken");
    setup_git_repo(&broken).expect("Failed to setup broken repo");
    create_test_commit(&broken, "a.txt", "a", "Initial commit").expect("Failed to commit");
    corrupt_index(&broken).expect("Failed to corrupt index");

    let statuses = scan(root, 2, 4).await.expect("Scan should succeed");
    assert_eq!(statuses.len(), 4);

    let paths: Vec<_> = statuses.iter().map(|s| s.path().to_path_buf()).collect();
    assert_eq!(paths, vec![clean, ahead, local, broken]);

    let summary = statuses[0].summary().expect("clean repo should succeed");
    assert_eq!(summary.local_branch, "main");
    assert_eq!(summary.upstream_branch, "origin/main");
    assert_eq!(summary.ahead, Flag::No);
    assert_eq!(summary.uncommitted, Flag::No);
    assert_eq!(summary.untracked_files, Flag::No);

    let summary = statuses[1].summary().expect("ahead repo should succeed");
    assert_eq!(summary.upstream_branch, "origin/main");
    assert_eq!(summary.ahead, Flag::Yes);
    assert_eq!(summary.uncommitted, Flag::Yes);
    assert_eq!(summary.untracked_files, Flag::No);

    let summary = statuses[2].summary().expect("local repo should succeed");
    assert_eq!(summary.local_branch, "main");
    assert_eq!(summary.upstream_branch, "unknown");
    assert_eq!(summary.ahead, Flag::No);
    assert_eq!(summary.untracked_files, Flag::Yes);

    match &statuses[3] {
        RepositoryStatus::Failure { message, .. } => assert!(!message.is_empty()),
        other => panic!("Expected a failure record, got {:?}", other),
    }
}

#[tokio::test]
async fn test_sequential_and_concurrent_scans_agree() {
    if !is_git_available() {
        eprintln!("Git not available, skipping test");
        return;
    }

    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    for i in 0..6 {
        let repo = temp_dir.path().join(format!("repo-{i}"));
        setup_git_repo(&repo).expect("Failed to setup repo");
    }

    let sequential = scan(temp_dir.path(), 2, 1).await.expect("Scan should succeed");
    let concurrent = scan(temp_dir.path(), 2, 6).await.expect("Scan should succeed");
    assert_eq!(sequential, concurrent);
    assert_eq!(sequential.len(), 6);
}
