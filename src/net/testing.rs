//! Test doubles for the network layer.

use std::collections::VecDeque;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::error::ApiError;
use super::pipeline::{ApiClient, ApiRequest, ApiResponse, Transport};
use crate::config::ClientConfig;
use crate::session::{Session, SessionEffects, SessionStore};

#[derive(Default)]
struct Script {
    replies: VecDeque<Result<ApiResponse, ApiError>>,
    sent: Vec<ApiRequest>,
}

/// Transport that replays canned replies in order and records every request.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    script: Arc<Mutex<Script>>,
}

impl ScriptedTransport {
    pub(crate) fn reply(&self, status: u16, body: &str) -> &Self {
        self.script
            .lock()
            .unwrap()
            .replies
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
        self
    }

    pub(crate) fn fail(&self, err: ApiError) -> &Self {
        self.script.lock().unwrap().replies.push_back(Err(err));
        self
    }

    pub(crate) fn sent(&self) -> Vec<ApiRequest> {
        self.script.lock().unwrap().sent.clone()
    }

    pub(crate) fn last(&self) -> ApiRequest {
        self.sent().pop().expect("no request was sent")
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>> {
        let reply = {
            let mut script = self.script.lock().unwrap();
            script.sent.push(request);
            script
                .replies
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no scripted reply".to_owned())))
        };
        async move { reply }
    }
}

#[derive(Default)]
pub(crate) struct RecordingEffects {
    pub(crate) notices: AtomicUsize,
    pub(crate) redirects: AtomicUsize,
}

impl RecordingEffects {
    pub(crate) fn notices(&self) -> usize {
        self.notices.load(Ordering::SeqCst)
    }

    pub(crate) fn redirects(&self) -> usize {
        self.redirects.load(Ordering::SeqCst)
    }
}

impl SessionEffects for RecordingEffects {
    fn notify_expired(&self) {
        self.notices.fetch_add(1, Ordering::SeqCst);
    }

    fn redirect_to_login(&self, _login_path: &str) {
        self.redirects.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) struct Harness {
    pub(crate) client: ApiClient<ScriptedTransport>,
    pub(crate) transport: ScriptedTransport,
    pub(crate) store: SessionStore,
    pub(crate) effects: Arc<RecordingEffects>,
}

/// Client over in-memory storage, optionally pre-seeded with a credential,
/// with startup already run.
pub(crate) fn harness(credential: Option<&str>) -> Harness {
    let config = ClientConfig::from_values(Some("https://api.test"), None, None).unwrap();
    let store = SessionStore::in_memory(config.storage_key.clone());
    if let Some(credential) = credential {
        store.set(credential);
    }
    let effects = Arc::new(RecordingEffects::default());
    let session = Session::new(store.clone(), effects.clone(), &config);
    session.start();
    let transport = ScriptedTransport::default();
    let client = ApiClient::new(&config, session, transport.clone());
    Harness { client, transport, store, effects }
}
