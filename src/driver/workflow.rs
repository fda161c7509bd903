//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション
//!
//! Init → Configured → Authenticated → Processing → Done. Any failure before
//! processing completes moves the run to Aborted and exits with code 1;
//! per-file upload failures never do.

use log::{debug, error, info, warn};
use std::path::Path;
use std::sync::Arc;

use crate::adapter::config::{Config, LogLevel};
use crate::adapter::mstream::client::error_chain_to_string;
use crate::adapter::mstream::MstreamClient;
use crate::adapter::repositories::file_playlist_repository::FilePlaylistRepository;
use crate::application::use_cases::discover_playlists::DiscoverPlaylistsUseCase;
use crate::application::use_cases::upload_playlists::UploadPlaylistsUseCase;
use crate::domain::entities::playlist::{Playlist, PlaylistFile};
use crate::domain::entities::upload_outcome::RunSummary;
use crate::domain::errors::{PlaylistError, Result};
use crate::domain::repositories::playlist_repository::PlaylistRepository;
use crate::domain::repositories::session_client::SessionClient;

use super::cli::Args;
use super::logging::init_logging;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// 実行の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Init,
    Configured,
    Authenticated,
    Processing,
    Done,
    Aborted,
}

fn transition(state: RunState) {
    debug!("Run state: {:?}", state);
}

/// Playlist Upload Workflow
pub struct PlaylistUploadWorkflow<R: PlaylistRepository, C: SessionClient> {
    config: Config,
    discover_use_case: DiscoverPlaylistsUseCase<R>,
    upload_use_case: UploadPlaylistsUseCase<C>,
}

impl PlaylistUploadWorkflow<FilePlaylistRepository, MstreamClient> {
    /// Create a workflow wired to the filesystem and the configured mStream server
    pub fn new(config: Config) -> Result<Self> {
        let client = MstreamClient::new(config.base_url.clone())
            .map_err(|e| PlaylistError::Client(error_chain_to_string(&e)))?;

        Ok(Self::with_dependencies(
            config,
            Arc::new(FilePlaylistRepository::new()),
            Arc::new(client),
        ))
    }
}

impl<R: PlaylistRepository, C: SessionClient> PlaylistUploadWorkflow<R, C> {
    /// Create a workflow with injected dependencies
    pub fn with_dependencies(config: Config, playlist_repo: Arc<R>, session_client: Arc<C>) -> Self {
        Self {
            config,
            discover_use_case: DiscoverPlaylistsUseCase::new(playlist_repo),
            upload_use_case: UploadPlaylistsUseCase::new(session_client),
        }
    }

    /// Execute the upload workflow
    ///
    /// Login happens before discovery so that bad credentials are reported
    /// even when the path is wrong.
    pub async fn execute(&self, target: &Path, dry_run: bool) -> Result<RunSummary> {
        info!("Starting mStream playlist uploader...");
        info!("Server: {}", self.config.base_url);
        transition(RunState::Configured);

        if dry_run {
            info!("Dry run: no login, no upload");
            let playlists = self.discover(target).await?;
            transition(RunState::Processing);
            preview(&playlists).await;
            transition(RunState::Done);
            return Ok(RunSummary::new());
        }

        let session = self
            .upload_use_case
            .authenticate(&self.config.credentials())
            .await?;
        info!("🔑 Logged in as {}", self.config.username);
        transition(RunState::Authenticated);

        let playlists = self.discover(target).await?;

        transition(RunState::Processing);
        let summary = self.upload_use_case.execute(&session, &playlists).await;

        transition(RunState::Done);
        Ok(summary)
    }

    async fn discover(&self, target: &Path) -> Result<Vec<PlaylistFile>> {
        let playlists = self.discover_use_case.execute(target).await?;

        if playlists.is_empty() {
            warn!("No .m3u files found under {}", target.display());
        } else {
            info!("🔎 Found {} .m3u file(s) to process.", playlists.len());
        }

        Ok(playlists)
    }
}

/// Log what a real run would upload
async fn preview(playlists: &[PlaylistFile]) {
    for file in playlists {
        match tokio::fs::read(file.path()).await {
            Ok(content) => {
                let playlist = Playlist::parse(file.title(), &content);
                info!(
                    "Would upload playlist {} ({} songs)",
                    playlist.title,
                    playlist.len()
                );
            }
            Err(e) => error!("❌ Failed to read {}: {}", file.path().display(), e),
        }
    }
}

fn log_fatal(err: &PlaylistError) {
    error!("❌ {}", err);
    debug!("{:?}", err);
}

/// Map the run result to the process exit code, logging the final report
pub fn finish(result: &Result<RunSummary>) -> u8 {
    match result {
        Ok(summary) => {
            info!(
                "🎉 All done! {} uploaded, {} failed.",
                summary.succeeded(),
                summary.failed()
            );
            EXIT_SUCCESS
        }
        Err(err) => {
            transition(RunState::Aborted);
            log_fatal(err);
            EXIT_FAILURE
        }
    }
}

/// Run the whole program for already-parsed arguments
pub async fn run(args: Args) -> u8 {
    transition(RunState::Init);

    let config = match Config::load(Some(&args.env_file)) {
        Ok(config) => config,
        Err(err) => {
            init_logging(LogLevel::default());
            return finish(&Err(err));
        }
    };
    init_logging(config.log_level);
    debug!("Loaded {:?}", config);

    let result = match PlaylistUploadWorkflow::new(config) {
        Ok(workflow) => workflow.execute(&args.path, args.dry_run).await,
        Err(err) => Err(err),
    };

    finish(&result)
}
