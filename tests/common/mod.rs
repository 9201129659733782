#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use plainlegal::SimplifyError;
use plainlegal::ai::ChatBackend;
use plainlegal::core::config::{AppConfig, ProviderConfig};

/// Scripted reply for one provider.
#[derive(Clone)]
pub enum Reply {
    Answer(String),
    Nothing,
    Fail,
}

/// Fake backend that replays scripted replies and records which providers
/// were called, in order.
pub struct FakeBackend {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new(replies: &[(&str, Reply)]) -> Self {
        Self {
            replies: replies
                .iter()
                .map(|(name, reply)| ((*name).to_string(), reply.clone()))
                .collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for FakeBackend {
    async fn complete(
        &self,
        provider: &ProviderConfig,
        _credential: &str,
        _text: &str,
    ) -> Result<Option<String>, SimplifyError> {
        self.calls.lock().unwrap().push(provider.name.clone());
        match self.replies.get(&provider.name) {
            Some(Reply::Answer(s)) => Ok(Some(s.clone())),
            Some(Reply::Nothing) => Ok(None),
            Some(Reply::Fail) | None => Err(SimplifyError::HttpError(
                "operation timed out".to_string(),
            )),
        }
    }
}

/// Config with exactly the given environment entries.
pub fn config_with(vars: &[(&str, &str)]) -> AppConfig {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
}
