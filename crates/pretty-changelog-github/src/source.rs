//! GitHub compare log source.

use pretty_changelog_commit::{CommitLine, LogSource, ReleaseRange, SourceResult, parse_log};
use tracing::{debug, info};

use crate::{Clock, GithubClient, Repo, SystemClock, Throttle};

/// Reads commit lines from the GitHub compare API.
pub struct GithubLogSource<C: Clock = SystemClock> {
    client: GithubClient,
    repo: Repo,
    throttle: Throttle<C>,
}

impl GithubLogSource {
    /// Creates a source for `repo` using the wall clock for back-off.
    pub fn new(client: GithubClient, repo: Repo) -> Self {
        Self::with_throttle(client, repo, Throttle::default())
    }
}

impl<C: Clock> GithubLogSource<C> {
    /// Creates a source with a custom throttle.
    pub fn with_throttle(client: GithubClient, repo: Repo, throttle: Throttle<C>) -> Self {
        Self {
            client,
            repo,
            throttle,
        }
    }
}

impl<C: Clock> LogSource for GithubLogSource<C> {
    fn name(&self) -> &'static str {
        "github"
    }

    fn fetch(&self, range: &ReleaseRange) -> SourceResult<Vec<CommitLine>> {
        self.throttle.wait(&self.client);

        let base = range.lower_bound();
        debug!(repo = %self.repo, base, head = %range.current, "comparing commits");

        let lines = self
            .client
            .compare(&self.repo, base, &range.current)?;
        info!(repo = %self.repo, commits = lines.len(), "fetched commits");

        Ok(parse_log(&lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use chrono::{DateTime, Utc};
    use pretty_changelog_commit::SourceError;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const NOW: i64 = 1_700_000_000;

    /// Frozen clock that records requested sleeps.
    #[derive(Clone, Default)]
    struct RecordingClock {
        slept: Arc<Mutex<Vec<Duration>>>,
    }

    impl Clock for RecordingClock {
        fn now(&self) -> DateTime<Utc> {
            DateTime::from_timestamp(NOW, 0).unwrap()
        }

        fn sleep(&self, duration: Duration) {
            self.slept.lock().unwrap().push(duration);
        }
    }

    async fn mount_rate_limit(server: &MockServer, remaining: u64) {
        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resources": { "core": { "remaining": remaining, "reset": 0 } }
            })))
            .mount(server)
            .await;
    }

    fn source(uri: &str) -> GithubLogSource {
        let client = GithubClient::with_base_url("secret", uri).unwrap();
        let repo = Repo {
            owner: "owner".to_string(),
            name: "name".to_string(),
        };
        GithubLogSource::new(client, repo)
    }

    #[tokio::test]
    async fn test_fetch_from_first_commit() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 5000).await;
        Mock::given(method("GET"))
            .and(path("/repos/owner/name/compare/f00d...v1.0.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "commits": [
                { "sha": "aaa", "commit": { "message": "feat: don't panic" }, "author": { "login": "alice" } },
                { "sha": "bbb", "commit": { "message": "fix: bug" }, "author": { "login": "bob" } }
            ] })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let lines = tokio::task::spawn_blocking(move || {
            source(&uri).fetch(&ReleaseRange::new("v1.0.0", "f00d"))
        })
        .await
        .unwrap()
        .unwrap();

        let lines: Vec<&str> = lines.iter().map(CommitLine::as_str).collect();
        assert_eq!(
            lines,
            vec!["aaa: feat: dont panic (@alice)", "bbb: fix: bug (@bob)"]
        );
    }

    #[tokio::test]
    async fn test_fetch_proceeds_when_rate_limit_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/repos/owner/name/compare/v0.9.0...v1.0.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "commits": [] })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let lines = tokio::task::spawn_blocking(move || {
            source(&uri).fetch(&ReleaseRange::new("v1.0.0", "f00d").with_previous("v0.9.0"))
        })
        .await
        .unwrap()
        .unwrap();

        assert!(lines.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_error_is_remote() {
        let server = MockServer::start().await;
        mount_rate_limit(&server, 5000).await;
        Mock::given(method("GET"))
            .and(path("/repos/owner/name/compare/v0.9.0...v1.0.0"))
            .respond_with(ResponseTemplate::new(422).set_body_string("No common ancestor"))
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = tokio::task::spawn_blocking(move || {
            source(&uri).fetch(&ReleaseRange::new("v1.0.0", "f00d").with_previous("v0.9.0"))
        })
        .await
        .unwrap()
        .unwrap_err();

        assert!(matches!(err, SourceError::Remote(ref msg) if msg.contains("No common ancestor")));
    }

    #[tokio::test]
    async fn test_fetch_waits_for_quota_before_compare() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "resources": { "core": { "remaining": 50, "reset": NOW + 30 } }
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        mount_rate_limit(&server, 5000).await;
        Mock::given(method("GET"))
            .and(path("/repos/owner/name/compare/v0.9.0...v1.0.0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "commits": [
                { "sha": "aaa", "commit": { "message": "fix: bug" }, "author": { "login": "bob" } }
            ] })))
            .expect(1)
            .mount(&server)
            .await;

        let clock = RecordingClock::default();
        let slept = Arc::clone(&clock.slept);
        let uri = server.uri();
        let lines = tokio::task::spawn_blocking(move || {
            let client = GithubClient::with_base_url("secret", &uri).unwrap();
            let repo = Repo {
                owner: "owner".to_string(),
                name: "name".to_string(),
            };
            GithubLogSource::with_throttle(client, repo, Throttle::new(clock))
                .fetch(&ReleaseRange::new("v1.0.0", "f00d").with_previous("v0.9.0"))
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(*slept.lock().unwrap(), vec![Duration::from_secs(30)]);

        let paths: Vec<String> = server
            .received_requests()
            .await
            .unwrap()
            .iter()
            .map(|request| request.url.path().to_string())
            .collect();
        assert_eq!(
            paths,
            vec![
                "/rate_limit",
                "/rate_limit",
                "/repos/owner/name/compare/v0.9.0...v1.0.0"
            ]
        );
    }
}
