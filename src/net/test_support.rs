//! Scripted transport shared by network tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::Value;

use super::error::TransportError;
use super::transport::Transport;
use super::types::{ApiRequest, ApiResponse};

/// Replays queued outcomes in order and records every request it sees.
///
/// With an empty queue it answers `200 null`. Clones share the script.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<VecDeque<Result<ApiResponse, TransportError>>>>,
    seen: Rc<RefCell<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: Value) -> &Self {
        self.script.borrow_mut().push_back(Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(&self, error: TransportError) -> &Self {
        self.script.borrow_mut().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.seen.borrow().clone()
    }

    pub fn last(&self) -> Option<ApiRequest> {
        self.seen.borrow().last().cloned()
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
        self.seen.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse::new(200, Value::Null)))
    }
}
