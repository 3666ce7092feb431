//! One viewing session over one repository: the loaded commit list, the
//! resolved timeline configuration, and the de-duplication guard that keeps
//! a (file, commit) pair from being computed more than once.
//!

use parking_lot::Mutex;
use reqwest::Client;
use std::collections::HashSet;

use crate::api::client::{auth, commits, contents, diff, timeline};
use crate::config::RemoteConfig;
use crate::error::TimelineError;
use crate::model::{Commit, DiffRequest, DiffResult, FileIdentity, RepoReference, TimelineConfig};

pub struct Session {
    config: RemoteConfig,
    client: Client,
    reference: RepoReference,
    commits: Vec<Commit>,
    timeline: TimelineConfig,
    dispatched: Mutex<HashSet<FileIdentity>>,
}

impl Session {
    /// Opens a session for a parsed reference: acquires the (possibly
    /// anonymous) HTTP client once, then loads the commit list and the
    /// timeline configuration concurrently.
    pub async fn open(
        config: RemoteConfig,
        reference: RepoReference,
    ) -> Result<Session, TimelineError> {
        let client = auth::acquire_client(&config).await?;
        let mut session = Session {
            config,
            client,
            reference,
            commits: vec![],
            timeline: TimelineConfig::default(),
            dispatched: Mutex::new(HashSet::new()),
        };
        session.load().await?;
        Ok(session)
    }

    async fn load(&mut self) -> Result<(), TimelineError> {
        let revision = self.reference.start_commit.clone();
        let (commits, timeline) = futures::join!(
            commits::list_commits(&self.client, &self.config, &self.reference),
            timeline::resolve_timeline(
                &self.client,
                &self.config,
                &self.reference,
                revision.as_deref()
            ),
        );
        self.commits = commits?;
        self.timeline = timeline?;
        Ok(())
    }

    /// Switches the session to a new repository/commit context. Clears the
    /// dispatched set, so diffs may be computed again for the new context.
    pub async fn reset(&mut self, reference: RepoReference) -> Result<(), TimelineError> {
        log::debug!("session::reset {}", reference.slug());
        self.reference = reference;
        self.dispatched.lock().clear();
        self.load().await
    }

    pub fn reference(&self) -> &RepoReference {
        &self.reference
    }

    /// Loaded commits, newest first.
    pub fn commits(&self) -> &[Commit] {
        &self.commits
    }

    pub fn timeline(&self) -> &TimelineConfig {
        &self.timeline
    }

    /// The commit a caller should start from: the reference's pinned commit
    /// if it has one, otherwise the newest loaded commit.
    pub fn head_sha(&self) -> Result<String, TimelineError> {
        if let Some(sha) = &self.reference.start_commit {
            return Ok(sha.clone());
        }
        match self.commits.first() {
            Some(commit) => Ok(commit.sha.clone()),
            None => Err(TimelineError::no_commits_found()),
        }
    }

    /// The files a commit changed, filtered down to model files per the
    /// session's timeline configuration.
    pub async fn changed_model_files(&self, sha: &str) -> Result<Vec<String>, TimelineError> {
        let detail = commits::get_commit(&self.client, &self.config, &self.reference, sha).await?;
        Ok(detail
            .changed_files
            .into_iter()
            .filter(|path| self.timeline.is_model_file(path))
            .collect())
    }

    /// Resolves both revisions of a changed file plus the schema files valid
    /// at the target commit into a single diff request.
    ///
    /// Returns `Ok(None)` when this (file, commit) identity has already been
    /// dispatched in this session. The guard is check-then-mark under one
    /// lock acquisition with no await held, so two rapid requests for the
    /// same file cannot both pass.
    pub async fn assemble(
        &self,
        path: &str,
        sha: &str,
    ) -> Result<Option<DiffRequest>, TimelineError> {
        let identity = FileIdentity::new(path, sha);
        if !self.dispatched.lock().insert(identity.clone()) {
            log::debug!("session::assemble skipping duplicate {path} at {sha}");
            return Ok(None);
        }

        match self.assemble_inner(path, sha).await {
            Ok(request) => Ok(Some(request)),
            Err(err) => {
                // nothing reached the diff service, let a later action retry
                self.dispatched.lock().remove(&identity);
                Err(err)
            }
        }
    }

    async fn assemble_inner(&self, path: &str, sha: &str) -> Result<DiffRequest, TimelineError> {
        let predecessor =
            commits::first_parent(&self.client, &self.config, &self.reference, sha).await?;

        let from_model_content = match predecessor {
            Some(parent_sha) => {
                match contents::get_file_content(
                    &self.client,
                    &self.config,
                    &self.reference,
                    path,
                    Some(&parent_sha),
                )
                .await
                {
                    Ok(content) => content,
                    // file added in this commit
                    Err(err) if err.is_not_found() => String::new(),
                    Err(err) => return Err(err),
                }
            }
            None => String::new(),
        };

        // the caller asserts the file changed in this commit, so absence at
        // the target revision is a hard failure
        let to_model_content = match contents::get_file_content(
            &self.client,
            &self.config,
            &self.reference,
            path,
            Some(sha),
        )
        .await
        {
            Ok(content) => content,
            Err(err) if err.is_not_found() => {
                return Err(TimelineError::api_msg(format!(
                    "{path} missing at {sha} despite being listed as changed"
                )))
            }
            Err(err) => return Err(err),
        };

        // schema files are always read at the target revision
        let mut schema_contents = Vec::with_capacity(self.timeline.schema_files.len());
        for schema_path in &self.timeline.schema_files {
            let content = match contents::get_file_content(
                &self.client,
                &self.config,
                &self.reference,
                schema_path,
                Some(sha),
            )
            .await
            {
                Ok(content) => content,
                Err(err) if err.is_not_found() => {
                    return Err(TimelineError::api_msg(format!(
                        "schema file {schema_path} missing at {sha}"
                    )))
                }
                Err(err) => return Err(err),
            };
            schema_contents.push(content);
        }

        Ok(DiffRequest {
            model_name: path.to_string(),
            from_model_content,
            to_model_content,
            schema_contents,
        })
    }

    /// The full per-file pipeline: assemble (subject to the de-duplication
    /// guard) and post to the diff service. `Ok(None)` means the identity
    /// was already dispatched this session and no remote computation ran.
    pub async fn assemble_and_dispatch(
        &self,
        path: &str,
        sha: &str,
    ) -> Result<Option<DiffResult>, TimelineError> {
        let Some(request) = self.assemble(path, sha).await? else {
            return Ok(None);
        };
        let result = diff::request_diff(&self.client, &self.config, &request).await?;
        Ok(Some(result))
    }
}
