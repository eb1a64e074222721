use super::common::*;
use anyhow::Result;
use assert_fs::prelude::*;
use plan_coder::architect::ArchitectRound;
use plan_coder::config::Config;
use plan_coder::git::GitManager;
use plan_coder::session::SessionState;
use predicates::prelude::*;
use serial_test::serial;
use std::sync::Arc;

fn auto_accept_config() -> Config {
    let mut config = Config::default();
    config.architect.auto_accept = true;
    config
}

#[tokio::test]
#[serial]
async fn test_round_stages_deletion_in_git_workspace() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.setup_test_project()?;
    env.init_git().await?;
    env.commit_all("initial snapshot").await?;

    let config = auto_accept_config();
    let mut session = SessionState::new();
    let io = Arc::new(RecordingIo::accepting());
    let spawner = MockSpawner::with_edits(&["src/main.rs"], 0.03);

    let mut round =
        ArchitectRound::new(&config, &mut session, env.project_path.clone(), io.clone());
    let summary = round
        .process("DELETE FILE: old.txt\nUpdate the greeting in main.rs", &spawner)
        .await?
        .expect("round should produce a summary");

    assert_contains(&summary, "deleted old.txt");
    assert_contains(&summary, "made other changes to src/main.rs");
    assert!(!env.project_path.join("old.txt").exists());

    // Removal went through git, so the deletion is staged for commit.
    let git = GitManager::discover(&env.project_path).unwrap();
    assert_contains(&git.status().await?, "D  old.txt");

    assert_eq!(spawner.spawn_count(), 1);
    assert_eq!(
        spawner.instructions_seen(),
        vec!["Update the greeting in main.rs".to_string()]
    );
    assert!(session.edited_files.contains("old.txt"));
    assert!(session.edited_files.contains("src/main.rs"));

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_repeat_deletion_is_not_found_not_failed() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.setup_test_project()?;
    env.init_git().await?;
    env.commit_all("initial snapshot").await?;

    let config = auto_accept_config();
    let mut session = SessionState::new();
    let spawner = MockSpawner::new();

    let io = Arc::new(RecordingIo::accepting());
    let mut round =
        ArchitectRound::new(&config, &mut session, env.project_path.clone(), io.clone());
    round.process("DELETE FILE: old.txt", &spawner).await?;
    assert!(io.errors().is_empty());

    // Second round on the same path: the target is gone, which is a warning,
    // never a failure.
    let io = Arc::new(RecordingIo::accepting());
    let mut round =
        ArchitectRound::new(&config, &mut session, env.project_path.clone(), io.clone());
    let summary = round
        .process("DELETE FILE: old.txt", &spawner)
        .await?
        .expect("intent is still acknowledged");

    assert_contains(&summary, "deleted old.txt");
    assert!(io.errors().is_empty());
    assert!(io.warnings().iter().any(|w| w.contains("non-existent")));
    assert_eq!(spawner.spawn_count(), 0);

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_failed_deletion_falls_back_to_editor() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.setup_test_project()?;
    env.init_git().await?;
    // old.txt exists but was never committed, so `git rm` refuses it.

    let config = auto_accept_config();
    let mut session = SessionState::new();
    let io = Arc::new(RecordingIo::accepting());
    let spawner = MockSpawner::new();

    let mut round =
        ArchitectRound::new(&config, &mut session, env.project_path.clone(), io.clone());
    let summary = round
        .process("DELETE FILE: old.txt\nthen tidy the imports", &spawner)
        .await?
        .expect("round still runs the editor");

    // The file is untouched and the original directive line is re-forwarded,
    // prefix included, at its original position.
    assert!(env.project_path.join("old.txt").exists());
    assert!(io.errors().iter().any(|e| e.contains("old.txt")));
    assert_eq!(spawner.spawn_count(), 1);
    assert_eq!(
        spawner.instructions_seen(),
        vec!["DELETE FILE: old.txt\nthen tidy the imports".to_string()]
    );
    assert!(!session.edited_files.contains("old.txt"));
    assert_contains(&summary, "processed the architect's instructions");

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_editor_failure_propagates_and_deletions_stand() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.setup_test_project()?;
    env.init_git().await?;
    env.commit_all("initial snapshot").await?;

    let config = auto_accept_config();
    let mut session = SessionState::new();
    let io = Arc::new(RecordingIo::accepting());
    let spawner = MockSpawner::failing("model connection lost");

    let mut round =
        ArchitectRound::new(&config, &mut session, env.project_path.clone(), io.clone());
    let result = round
        .process("DELETE FILE: old.txt\nrefactor everything", &spawner)
        .await;

    assert!(result.is_err());
    // No rollback: the deletion happened before the editor run.
    assert!(!env.project_path.join("old.txt").exists());
    assert!(session.edited_files.contains("old.txt"));

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_plain_filesystem_delete_without_git() -> Result<()> {
    let env = TestEnvironment::new()?;
    env.setup_test_project()?;
    // No git init at all.

    let config = auto_accept_config();
    let mut session = SessionState::new();
    let io = Arc::new(RecordingIo::accepting());
    let spawner = MockSpawner::new();

    let mut round =
        ArchitectRound::new(&config, &mut session, env.project_path.clone(), io.clone());
    let summary = round
        .process("DELETE FILE: old.txt", &spawner)
        .await?
        .expect("deletions-only summary");

    assert_contains(&summary, "deleted old.txt");
    env.temp_dir
        .child("old.txt")
        .assert(predicate::path::missing());
    assert!(io.errors().is_empty());

    Ok(())
}
