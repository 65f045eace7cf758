// Standard library
use std::net::IpAddr;
use std::time::Duration;

// 3rd party crates
use async_trait::async_trait;
use surge_ping::{Client, Config, PingIdentifier, PingSequence};
use tracing::debug;

// Project imports
use crate::checker::traits::Probe;
use crate::settings::types::ProbeSettings;

// Current module imports
use super::errors::ProbeError;
use super::types::{IcmpProber, LatencyStats};

impl LatencyStats {
    /// Folds per-probe round-trip samples (milliseconds) into min/max/avg.
    /// Returns `None` for an empty sample set.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        let first = *samples.first()?;
        let mut min_ms = first;
        let mut max_ms = first;
        let mut sum = 0.0;

        for &sample in samples {
            min_ms = min_ms.min(sample);
            max_ms = max_ms.max(sample);
            sum += sample;
        }

        Some(Self {
            min_ms,
            max_ms,
            avg_ms: sum / samples.len() as f64,
        })
    }
}

impl IcmpProber {
    pub fn new(settings: ProbeSettings) -> Result<Self, ProbeError> {
        let client =
            Client::new(&Config::default()).map_err(|e| ProbeError::Socket(e.to_string()))?;

        Ok(Self {
            client,
            count: settings.count,
            payload: vec![0u8; settings.payload_bytes],
            timeout: Duration::from_millis(settings.timeout_ms),
        })
    }
}

#[async_trait]
impl Probe for IcmpProber {
    async fn probe(&self, ip: IpAddr) -> Result<LatencyStats, ProbeError> {
        let mut pinger = self.client.pinger(ip, PingIdentifier(rand::random())).await;
        pinger.timeout(self.timeout);

        let mut samples: Vec<f64> = Vec::with_capacity(self.count as usize);
        for seq in 0..self.count {
            match pinger.ping(PingSequence(seq as u16), &self.payload).await {
                Ok((_, rtt)) => samples.push(rtt.as_secs_f64() * 1000.0),
                Err(e) => debug!("Probe {} to {} lost: {}", seq, ip, e),
            }
        }

        LatencyStats::from_samples(&samples).ok_or(ProbeError::Unreachable(ip))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_over_known_samples() {
        let stats = LatencyStats::from_samples(&[1.0, 5.0, 1.5]).unwrap();

        assert_eq!(stats.min_ms, 1.0);
        assert_eq!(stats.max_ms, 5.0);
        assert_eq!(stats.avg_ms, 2.5);
    }

    #[test]
    fn min_avg_max_are_ordered() {
        let stats = LatencyStats::from_samples(&[12.25, 3.5, 7.75, 3.5]).unwrap();

        assert!(stats.min_ms <= stats.avg_ms);
        assert!(stats.avg_ms <= stats.max_ms);
    }

    #[test]
    fn single_sample_collapses_to_itself() {
        let stats = LatencyStats::from_samples(&[4.2]).unwrap();

        assert_eq!(stats.min_ms, 4.2);
        assert_eq!(stats.max_ms, 4.2);
        assert_eq!(stats.avg_ms, 4.2);
    }

    #[test]
    fn no_samples_means_no_stats() {
        assert!(LatencyStats::from_samples(&[]).is_none());
    }
}
