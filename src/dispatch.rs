//! Off-thread odds computation with a staleness-discard protocol. Exact enumeration can
//! take seconds, so requests are serviced by a dedicated worker thread. There is no
//! cancellation: a superseded request runs to completion and its response is discarded by
//! sequence number on the consuming side. Only the response matching the most recently
//! issued request is ever surfaced.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use anyhow::anyhow;
use tracing::debug;

use crate::odds::{Odds, OddsEngine};

#[derive(Debug, Clone, PartialEq)]
pub struct OddsRequest {
    pub weights: Vec<f64>,
    pub num_to_pick: usize,
    pub force_exact: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OddsResponse {
    pub request_id: u64,
    pub odds: Odds,
}

/// Handle to the worker thread. Requests are tagged with a monotonically increasing
/// sequence number on submission; responses bearing any earlier number are silently
/// dropped. The worker is joined on drop.
pub struct OddsWorker {
    requests: Option<Sender<(u64, OddsRequest)>>,
    responses: Receiver<OddsResponse>,
    last_issued: u64,
    handle: Option<JoinHandle<()>>,
}
impl OddsWorker {
    pub fn spawn(engine: OddsEngine) -> Self {
        let (request_tx, request_rx) = mpsc::channel::<(u64, OddsRequest)>();
        let (response_tx, response_rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            for (request_id, request) in request_rx {
                let odds =
                    engine.compute(&request.weights, request.num_to_pick, request.force_exact);
                if response_tx.send(OddsResponse { request_id, odds }).is_err() {
                    break;
                }
            }
        });
        Self {
            requests: Some(request_tx),
            responses: response_rx,
            last_issued: 0,
            handle: Some(handle),
        }
    }

    /// Enqueues a request, superseding all earlier ones, and returns its sequence number.
    pub fn submit(&mut self, request: OddsRequest) -> anyhow::Result<u64> {
        let requests = self
            .requests
            .as_ref()
            .ok_or_else(|| anyhow!("odds worker is shutting down"))?;
        self.last_issued += 1;
        requests
            .send((self.last_issued, request))
            .map_err(|_| anyhow!("odds worker has terminated"))?;
        Ok(self.last_issued)
    }

    /// Non-blocking poll: drains whatever responses are ready and returns the one matching
    /// the latest request, if it has arrived.
    pub fn try_latest(&mut self) -> Option<OddsResponse> {
        let mut latest = None;
        while let Ok(response) = self.responses.try_recv() {
            if self.retain(&response) {
                latest = Some(response);
            }
        }
        latest
    }

    /// Blocks until the response to the most recently issued request arrives, discarding
    /// stale in-flight responses along the way.
    pub fn latest(&mut self) -> anyhow::Result<OddsResponse> {
        if self.last_issued == 0 {
            return Err(anyhow!("no request has been submitted"));
        }
        loop {
            let response = self
                .responses
                .recv()
                .map_err(|_| anyhow!("odds worker has terminated"))?;
            if self.retain(&response) {
                return Ok(response);
            }
        }
    }

    fn retain(&self, response: &OddsResponse) -> bool {
        if response.request_id == self.last_issued {
            true
        } else {
            debug!(
                "discarding stale response {} (latest request is {})",
                response.request_id, self.last_issued
            );
            false
        }
    }
}

impl Drop for OddsWorker {
    fn drop(&mut self) {
        drop(self.requests.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(weights: &[f64], num_to_pick: usize) -> OddsRequest {
        OddsRequest {
            weights: weights.to_vec(),
            num_to_pick,
            force_exact: false,
        }
    }

    #[test]
    fn round_trip() {
        let mut worker = OddsWorker::spawn(OddsEngine::default());
        let request_id = worker.submit(request(&[3.0, 1.0], 1)).unwrap();
        let response = worker.latest().unwrap();
        assert_eq!(request_id, response.request_id);
        assert!(!response.odds.approximate);
        assert_eq!(2, response.odds.matrix.rows());
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut worker = OddsWorker::spawn(OddsEngine::default().with_trials(100));
        worker.submit(request(&[1.0, 2.0, 3.0], 2)).unwrap();
        let superseding_id = worker.submit(request(&[5.0, 3.0, 2.0, 1.0], 2)).unwrap();
        let response = worker.latest().unwrap();
        assert_eq!(superseding_id, response.request_id);
        assert_eq!(4, response.odds.matrix.rows());
        // nothing else may surface afterwards
        assert_eq!(None, worker.try_latest());
    }

    #[test]
    fn latest_without_submission_is_an_error() {
        let mut worker = OddsWorker::spawn(OddsEngine::default());
        assert!(worker.latest().is_err());
    }

    #[test]
    fn try_latest_when_idle() {
        let mut worker = OddsWorker::spawn(OddsEngine::default());
        assert_eq!(None, worker.try_latest());
    }

    #[test]
    fn sequence_numbers_increase_monotonically() {
        let mut worker = OddsWorker::spawn(OddsEngine::default());
        let first = worker.submit(request(&[1.0], 1)).unwrap();
        let second = worker.submit(request(&[1.0], 1)).unwrap();
        assert!(second > first);
    }
}
