// Standard library
use std::sync::Arc;

// 3rd party crates
use tracing::{error, info, warn};

// Project imports
use crate::settings::types::ServerSpec;

// Current module imports
use super::errors::CheckError;
use super::traits::{Locate, Probe, Resolve};
use super::types::{EdgeCheck, PairOutcome, RunReport};

impl EdgeCheck {
    pub fn new(
        resolver: Arc<dyn Resolve>,
        locator: Arc<dyn Locate>,
        prober: Arc<dyn Probe>,
    ) -> Self {
        Self {
            resolver,
            locator,
            prober,
        }
    }

    /// Walks every (hostname, label) pair in file order. A failed pair is
    /// logged and skipped; the loop never aborts.
    pub async fn run(&self, targets: &ServerSpec) -> RunReport {
        let mut report = RunReport::default();

        for (hostname, servers) in targets {
            info!("{}", hostname);

            for (label, server) in servers {
                info!("DNS server location: {}, DNS server address: {}", label, server);

                match self.check_pair(hostname, server).await {
                    Ok(PairOutcome::Completed) => report.completed += 1,
                    Ok(PairOutcome::NoAnswer) => {
                        warn!("{} has no address records at {} ({})", hostname, server, label);
                        report.skipped += 1;
                    }
                    Err(e) => {
                        error!("Skipping {} via {} ({}): {}", hostname, server, label, e);
                        report.skipped += 1;
                    }
                }
            }
        }

        report
    }

    async fn check_pair(&self, hostname: &str, server: &str) -> Result<PairOutcome, CheckError> {
        let ip = match self.resolver.resolve(hostname, server).await? {
            Some(ip) => ip,
            None => return Ok(PairOutcome::NoAnswer),
        };

        let location = self.locator.locate(ip).await?;
        info!(
            "country_code: {}, city: {}",
            location.country_code_display(),
            location.city_display()
        );

        match self.prober.probe(ip).await {
            Ok(stats) => info!(
                "ip: {}, min: {:.2} ms, max: {:.2} ms, avg: {:.2} ms",
                ip, stats.min_ms, stats.max_ms, stats.avg_ms
            ),
            // Loss is a finding, not a reason to stop the run.
            Err(e) => warn!("{} isn't reachable: {}", ip, e),
        }

        Ok(PairOutcome::Completed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::net::IpAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use indexmap::IndexMap;

    use crate::geo::errors::LookupError;
    use crate::geo::types::GeoLocation;
    use crate::prober::errors::ProbeError;
    use crate::prober::types::LatencyStats;
    use crate::resolver::errors::ResolutionError;

    use super::*;

    const EDGE_IP: &str = "3.3.3.3";

    fn edge_ip() -> IpAddr {
        EDGE_IP.parse().unwrap()
    }

    fn spec(entries: &[(&str, &[(&str, &str)])]) -> ServerSpec {
        let mut targets = ServerSpec::new();
        for (hostname, servers) in entries {
            let mut labelled = IndexMap::new();
            for (label, address) in *servers {
                labelled.insert(label.to_string(), address.to_string());
            }
            targets.insert(hostname.to_string(), labelled);
        }
        targets
    }

    /// Resolver that replays a scripted answer per call and records the
    /// (hostname, server) pairs it was asked about.
    struct ScriptedResolver {
        answers: Mutex<VecDeque<Result<Option<IpAddr>, ResolutionError>>>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedResolver {
        fn new(answers: Vec<Result<Option<IpAddr>, ResolutionError>>) -> Self {
            Self {
                answers: Mutex::new(answers.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn always(ip: IpAddr, pairs: usize) -> Self {
            Self::new((0..pairs).map(|_| Ok(Some(ip))).collect())
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Resolve for ScriptedResolver {
        async fn resolve(
            &self,
            hostname: &str,
            server: &str,
        ) -> Result<Option<IpAddr>, ResolutionError> {
            self.calls
                .lock()
                .unwrap()
                .push((hostname.to_string(), server.to_string()));
            self.answers
                .lock()
                .unwrap()
                .pop_front()
                .expect("resolver script exhausted")
        }
    }

    /// Locator that fails for the first `failures` calls, then succeeds.
    struct CountingLocator {
        failures: usize,
        calls: AtomicUsize,
    }

    impl CountingLocator {
        fn reliable() -> Self {
            Self {
                failures: 0,
                calls: AtomicUsize::new(0),
            }
        }

        fn failing_first(failures: usize) -> Self {
            Self {
                failures,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Locate for CountingLocator {
        async fn locate(&self, _ip: IpAddr) -> Result<GeoLocation, LookupError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                return Err(LookupError::MalformedPayload("no '(' in response".into()));
            }
            Ok(GeoLocation {
                country_code: Some("US".to_string()),
                city: Some("Ashburn".to_string()),
            })
        }
    }

    /// Prober with a fixed answer and a call counter.
    struct CountingProber {
        reachable: bool,
        calls: AtomicUsize,
    }

    impl CountingProber {
        fn reachable() -> Self {
            Self {
                reachable: true,
                calls: AtomicUsize::new(0),
            }
        }

        fn dead() -> Self {
            Self {
                reachable: false,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Probe for CountingProber {
        async fn probe(&self, ip: IpAddr) -> Result<LatencyStats, ProbeError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reachable {
                Ok(LatencyStats {
                    min_ms: 1.0,
                    max_ms: 5.0,
                    avg_ms: 2.5,
                })
            } else {
                Err(ProbeError::Unreachable(ip))
            }
        }
    }

    #[tokio::test]
    async fn completes_every_pair_in_insertion_order() {
        let targets = spec(&[
            ("cdn-b.example.com", &[("east", "8.8.8.8"), ("west", "1.1.1.1")]),
            ("cdn-a.example.com", &[("south", "9.9.9.9")]),
        ]);

        let resolver = Arc::new(ScriptedResolver::always(edge_ip(), 3));
        let check = EdgeCheck::new(
            resolver.clone(),
            Arc::new(CountingLocator::reliable()),
            Arc::new(CountingProber::reachable()),
        );

        let report = check.run(&targets).await;

        assert_eq!(
            report,
            RunReport {
                completed: 3,
                skipped: 0
            }
        );
        assert_eq!(
            resolver.calls(),
            [
                ("cdn-b.example.com".to_string(), "8.8.8.8".to_string()),
                ("cdn-b.example.com".to_string(), "1.1.1.1".to_string()),
                ("cdn-a.example.com".to_string(), "9.9.9.9".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn geolocation_failure_skips_only_that_pair() {
        let targets = spec(&[(
            "cdn.example.com",
            &[("east", "8.8.8.8"), ("west", "1.1.1.1")],
        )]);

        let prober = Arc::new(CountingProber::reachable());
        let check = EdgeCheck::new(
            Arc::new(ScriptedResolver::always(edge_ip(), 2)),
            Arc::new(CountingLocator::failing_first(1)),
            prober.clone(),
        );

        let report = check.run(&targets).await;

        // The first pair fails in geolocation; the second still runs.
        assert_eq!(
            report,
            RunReport {
                completed: 1,
                skipped: 1
            }
        );
        assert_eq!(prober.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_resolution_skips_downstream_stages() {
        let targets = spec(&[("cdn.example.com", &[("east", "8.8.8.8")])]);

        let locator = Arc::new(CountingLocator::reliable());
        let prober = Arc::new(CountingProber::reachable());
        let check = EdgeCheck::new(
            Arc::new(ScriptedResolver::new(vec![Ok(None)])),
            locator.clone(),
            prober.clone(),
        );

        let report = check.run(&targets).await;

        assert_eq!(
            report,
            RunReport {
                completed: 0,
                skipped: 1
            }
        );
        assert_eq!(locator.calls.load(Ordering::SeqCst), 0);
        assert_eq!(prober.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unreachable_edge_still_counts_as_completed() {
        let targets = spec(&[("cdn.example.com", &[("east", "8.8.8.8")])]);

        let check = EdgeCheck::new(
            Arc::new(ScriptedResolver::always(edge_ip(), 1)),
            Arc::new(CountingLocator::reliable()),
            Arc::new(CountingProber::dead()),
        );

        let report = check.run(&targets).await;

        assert_eq!(
            report,
            RunReport {
                completed: 1,
                skipped: 0
            }
        );
    }

    #[tokio::test]
    async fn resolution_transport_failure_skips_the_pair() {
        let targets = spec(&[(
            "cdn.example.com",
            &[("east", "definitely-bad"), ("west", "1.1.1.1")],
        )]);

        let resolver = ScriptedResolver::new(vec![
            Err(ResolutionError::InvalidServer {
                address: "definitely-bad".to_string(),
                message: "system resolver returned no addresses".to_string(),
            }),
            Ok(Some(edge_ip())),
        ]);
        let check = EdgeCheck::new(
            Arc::new(resolver),
            Arc::new(CountingLocator::reliable()),
            Arc::new(CountingProber::reachable()),
        );

        let report = check.run(&targets).await;

        assert_eq!(
            report,
            RunReport {
                completed: 1,
                skipped: 1
            }
        );
    }
}
