//! Sync gateway
//!
//! Requests are handed to a single worker thread and answered through a
//! channel, so the UI loop never waits on the network. The worker handles
//! one request at a time, which keeps responses in dispatch order.

use super::{ApiRequest, ApiResponse, GatewayError, GatewayEvent, Transport};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

/// What to do when a request fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log the failure, never retry, leave client state unchanged
    #[default]
    BestEffort,
}

impl FailurePolicy {
    /// Additional attempts after a failure
    #[must_use]
    pub const fn retries(self) -> u32 {
        match self {
            Self::BestEffort => 0,
        }
    }

    /// Report a failed request
    pub fn report(self, request: &ApiRequest, error: &GatewayError) {
        match self {
            Self::BestEffort if error.is_server_failure() => {
                log::warn!("{request} failed: {error}");
            }
            Self::BestEffort => log::error!("{request} failed: {error}"),
        }
    }
}

type Reply = (ApiRequest, Result<ApiResponse, GatewayError>);

pub struct SyncGateway {
    jobs: Sender<ApiRequest>,
    replies: Receiver<Reply>,
    policy: FailurePolicy,
    in_flight: usize,
}

impl SyncGateway {
    /// Start the worker thread around `transport`
    pub fn spawn<T: Transport>(transport: T, policy: FailurePolicy) -> Self {
        let (jobs, job_rx) = mpsc::channel::<ApiRequest>();
        let (reply_tx, replies) = mpsc::channel::<Reply>();

        thread::spawn(move || {
            for request in job_rx {
                let mut result = transport.execute(&request);
                let mut attempt = 0;
                while result.is_err() && attempt < policy.retries() {
                    attempt += 1;
                    result = transport.execute(&request);
                }
                if reply_tx.send((request, result)).is_err() {
                    break;
                }
            }
            log::debug!("request worker stopped");
        });

        Self {
            jobs,
            replies,
            policy,
            in_flight: 0,
        }
    }

    /// Queue a request; returns immediately
    pub fn dispatch(&mut self, request: ApiRequest) {
        log::debug!("dispatching {request}");
        match self.jobs.send(request) {
            Ok(()) => self.in_flight += 1,
            Err(mpsc::SendError(request)) => {
                self.policy.report(&request, &GatewayError::WorkerGone);
            }
        }
    }

    pub fn dispatch_all(&mut self, requests: impl IntoIterator<Item = ApiRequest>) {
        for request in requests {
            self.dispatch(request);
        }
    }

    /// Collect every reply that has arrived, without waiting
    pub fn poll(&mut self) -> Vec<GatewayEvent> {
        let replies: Vec<Reply> = self.replies.try_iter().collect();
        replies
            .into_iter()
            .map(|reply| self.settle(reply))
            .collect()
    }

    /// Wait up to `timeout` for the next reply
    pub fn wait(&mut self, timeout: Duration) -> Option<GatewayEvent> {
        match self.replies.recv_timeout(timeout) {
            Ok(reply) => Some(self.settle(reply)),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Requests dispatched but not yet answered
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    #[must_use]
    pub const fn policy(&self) -> FailurePolicy {
        self.policy
    }

    fn settle(&mut self, (request, result): Reply) -> GatewayEvent {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(response) => {
                log::debug!("{request} completed");
                GatewayEvent::Completed { request, response }
            }
            Err(error) => {
                self.policy.report(&request, &error);
                GatewayEvent::Failed { request }
            }
        }
    }
}
