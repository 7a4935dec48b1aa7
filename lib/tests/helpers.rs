// Copyright (c) 2022-2023 The MobileCoin Foundation

use std::{collections::VecDeque, str::FromStr};

use async_trait::async_trait;
use log::{debug, LevelFilter};
use simplelog::SimpleLogger;

use ledger_exchange::{
    apdu::{ApduHeader, StatusCode},
    Channel,
};

/// Request captured by [MockChannel]
#[derive(Clone, PartialEq, Debug)]
pub struct Sent {
    /// CLA, INS, P1, P2
    pub header: [u8; 4],
    /// APDU payload
    pub data: Vec<u8>,
    /// Status codes accepted by the caller
    pub accepted: Vec<StatusCode>,
}

/// Mock transport error
#[derive(Clone, PartialEq, Debug)]
pub struct MockError(pub &'static str);

impl std::fmt::Display for MockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mock: {}", self.0)
    }
}

/// Recording channel, answering requests from a queue of canned responses
#[derive(Default)]
pub struct MockChannel {
    pub sent: Vec<Sent>,
    pub responses: VecDeque<Result<Vec<u8>, MockError>>,
}

impl MockChannel {
    /// Create a channel answering with the provided responses in order
    pub fn new(responses: impl IntoIterator<Item = Vec<u8>>) -> Self {
        Self {
            sent: vec![],
            responses: responses.into_iter().map(Ok).collect(),
        }
    }

    /// Queue a transport failure
    #[allow(unused)]
    pub fn fail(mut self, e: &'static str) -> Self {
        self.responses.push_back(Err(MockError(e)));
        self
    }
}

#[async_trait]
impl Channel for MockChannel {
    type Error = MockError;

    async fn send(
        &mut self,
        header: ApduHeader,
        data: &[u8],
        accepted: &[StatusCode],
    ) -> Result<Vec<u8>, Self::Error> {
        let header = [header.cla, header.ins, header.p1, header.p2];

        debug!("mock request: {:02x?} {}", header, hex::encode(data));

        self.sent.push(Sent {
            header,
            data: data.to_vec(),
            accepted: accepted.to_vec(),
        });

        self.responses
            .pop_front()
            .unwrap_or(Err(MockError("no response queued")))
    }
}

/// Build a response from a body and status code
#[allow(unused)]
pub fn resp(body: &[u8], status: u16) -> Vec<u8> {
    let mut r = body.to_vec();
    r.extend_from_slice(&status.to_be_bytes());
    r
}

/// Success response with no body
#[allow(unused)]
pub fn ok() -> Vec<u8> {
    resp(&[], 0x9000)
}

/// Setup test logging
pub fn setup() {
    let log_level = match std::env::var("LOG_LEVEL").map(|v| LevelFilter::from_str(&v)) {
        Ok(Ok(l)) => l,
        _ => LevelFilter::Debug,
    };

    let _ = SimpleLogger::init(log_level, simplelog::Config::default());
}
