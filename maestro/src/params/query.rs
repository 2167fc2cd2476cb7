//! Query-string transport: `?page=pageB&id=1a2b3`.

use std::collections::BTreeMap;
use std::sync::Arc;

use url::Url;

use crate::params::{BrowserHistory, UrlParamsAdapter};

/// Reads and writes parameters in the query string of the current history entry.
#[derive(Debug, Clone)]
pub struct QueryParamsAdapter {
    history: Arc<BrowserHistory>,
}

impl QueryParamsAdapter {
    pub fn new(history: Arc<BrowserHistory>) -> Self {
        Self { history }
    }

    pub fn history(&self) -> &Arc<BrowserHistory> {
        &self.history
    }

    /// Current URL with `name` set to `value`; other parameters keep their order.
    fn with_param(&self, name: &str, value: &str) -> Url {
        let mut url = self.history.current();
        let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let mut replaced = false;
        pairs.retain_mut(|(k, v)| {
            if k != name {
                return true;
            }
            if replaced {
                return false;
            }
            *v = value.to_string();
            replaced = true;
            true
        });
        if !replaced {
            pairs.push((name.to_string(), value.to_string()));
        }
        url.query_pairs_mut().clear().extend_pairs(pairs);
        url
    }
}

impl UrlParamsAdapter for QueryParamsAdapter {
    fn get_param(&self, name: &str) -> Option<String> {
        self.history
            .current()
            .query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    fn set_param(&self, name: &str, value: &str) {
        let url = self.with_param(name, value);
        self.history.push(url);
    }

    fn replace_param(&self, name: &str, value: &str) {
        let url = self.with_param(name, value);
        self.history.replace(url);
    }

    /// Every parameter; a repeated key keeps its last value.
    fn get_all_params(&self) -> BTreeMap<String, String> {
        self.history
            .current()
            .query_pairs()
            .into_owned()
            .collect()
    }

    fn replace_params(&self, params: &BTreeMap<String, String>) {
        let mut url = self.history.current();
        if params.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(params.iter());
        }
        self.history.replace(url);
    }

    fn back(&self) -> bool {
        self.history.len() > 1 && self.history.back()
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }
}
