//! Path-segment transport: parameters embedded in the path via a template such as
//! `/[id]/page/[page]`.
//!
//! Template placeholders are bracket-delimited names. Matching is anchored at the end of
//! the path only, so a path may carry any prefix before the template.

use std::collections::BTreeMap;
use std::sync::Arc;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use thiserror::Error;

use crate::logging;
use crate::params::{BrowserHistory, UrlParamsAdapter};

/// Characters escaped in a path segment (everything `encodeURIComponent` escapes).
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Error compiling a path template.
#[derive(Debug, Error)]
pub enum PathTemplateError {
    #[error("invalid path template \"{template}\": {message}")]
    Regex { template: String, message: String },
}

/// Parsed path template.
#[derive(Debug, Clone)]
pub struct PathTemplate {
    template: String,
    names: Vec<String>,
    pattern: Regex,
}

fn placeholder_regex() -> Result<Regex, regex::Error> {
    Regex::new(r"\[([^\]]+)\]")
}

impl PathTemplate {
    /// Parses placeholder names and compiles the matching pattern.
    pub fn parse(template: &str) -> Result<Self, PathTemplateError> {
        let to_err = |e: regex::Error| PathTemplateError::Regex {
            template: template.to_string(),
            message: e.to_string(),
        };
        let placeholders = placeholder_regex().map_err(to_err)?;
        let mut names = Vec::new();
        let mut pattern = String::new();
        let mut last = 0;
        for caps in placeholders.captures_iter(template) {
            let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            pattern.push_str(&regex::escape(&template[last..whole.start()]));
            pattern.push_str("([^/]+)");
            names.push(name.as_str().to_string());
            last = whole.end();
        }
        pattern.push_str(&regex::escape(&template[last..]));
        pattern.push('$');
        Ok(Self {
            template: template.to_string(),
            names,
            pattern: Regex::new(&pattern).map_err(to_err)?,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Placeholder names in template order.
    pub fn param_names(&self) -> &[String] {
        &self.names
    }

    pub fn declares(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Literal text before the first placeholder.
    pub fn literal_prefix(&self) -> &str {
        self.template
            .split('[')
            .next()
            .unwrap_or(self.template.as_str())
    }

    /// Substitutes each known parameter, percent-encoded. Missing ones keep their
    /// `[name]` placeholder.
    pub fn build(&self, params: &BTreeMap<String, String>) -> String {
        let mut path = self.template.clone();
        for (key, value) in params {
            let encoded = utf8_percent_encode(value, SEGMENT).to_string();
            path = path.replacen(&format!("[{}]", key), &encoded, 1);
        }
        path
    }

    /// Extracts parameters from `path`. Empty when the path does not match; placeholder
    /// text left by [`build`](Self::build) is not reported as a value.
    pub fn match_path(&self, path: &str) -> BTreeMap<String, String> {
        let mut out = BTreeMap::new();
        let Some(caps) = self.pattern.captures(path) else {
            return out;
        };
        for (i, name) in self.names.iter().enumerate() {
            let Some(m) = caps.get(i + 1) else {
                continue;
            };
            let value = percent_decode_str(m.as_str()).decode_utf8_lossy();
            if value.is_empty() || value == format!("[{}]", name) {
                continue;
            }
            out.insert(name.clone(), value.into_owned());
        }
        out
    }
}

/// Where a path adapter's template lives.
#[derive(Debug, Clone, Default)]
pub struct PathConfig {
    /// Template such as `/[id]/page/[page]`.
    pub template: String,
    /// Prepended to the template, e.g. `/wizard`.
    pub base_path: Option<String>,
}

impl PathConfig {
    pub fn full_template(&self) -> String {
        match &self.base_path {
            Some(base) => format!("{}{}", base, self.template),
            None => self.template.clone(),
        }
    }
}

/// Reads and writes parameters as path segments of the current history entry.
///
/// Writes to names the template does not declare are logged and ignored.
#[derive(Debug, Clone)]
pub struct PathParamsAdapter {
    history: Arc<BrowserHistory>,
    template: PathTemplate,
}

impl PathParamsAdapter {
    pub fn new(history: Arc<BrowserHistory>, config: &PathConfig) -> Result<Self, PathTemplateError> {
        Ok(Self {
            history,
            template: PathTemplate::parse(&config.full_template())?,
        })
    }

    pub fn template(&self) -> &PathTemplate {
        &self.template
    }

    pub fn history(&self) -> &Arc<BrowserHistory> {
        &self.history
    }

    fn current_params(&self) -> BTreeMap<String, String> {
        self.template.match_path(self.history.current().path())
    }

    /// Path with `updates` merged over the current parameters. Text in the current path
    /// before the template's literal start is kept.
    fn build_full_path(&self, updates: &BTreeMap<String, String>) -> String {
        let mut merged = self.current_params();
        merged.extend(updates.iter().map(|(k, v)| (k.clone(), v.clone())));
        let new_path = self.template.build(&merged);
        let current = self.history.current();
        let current_path = current.path();
        match current_path.find(self.template.literal_prefix()) {
            Some(start) if start > 0 => format!("{}{}", &current_path[..start], new_path),
            _ => new_path,
        }
    }

    fn url_with_params(&self, updates: &BTreeMap<String, String>) -> url::Url {
        let mut url = self.history.current();
        url.set_path(&self.build_full_path(updates));
        url
    }

    fn single(name: &str, value: &str) -> BTreeMap<String, String> {
        BTreeMap::from([(name.to_string(), value.to_string())])
    }
}

impl UrlParamsAdapter for PathParamsAdapter {
    fn get_param(&self, name: &str) -> Option<String> {
        self.current_params().remove(name)
    }

    fn set_param(&self, name: &str, value: &str) {
        if !self.template.declares(name) {
            logging::log_param_not_in_template(name, self.template.as_str());
            return;
        }
        let url = self.url_with_params(&Self::single(name, value));
        self.history.push(url);
    }

    fn replace_param(&self, name: &str, value: &str) {
        if !self.template.declares(name) {
            logging::log_param_not_in_template(name, self.template.as_str());
            return;
        }
        let url = self.url_with_params(&Self::single(name, value));
        self.history.replace(url);
    }

    fn get_all_params(&self) -> BTreeMap<String, String> {
        self.current_params()
    }

    fn replace_params(&self, params: &BTreeMap<String, String>) {
        for key in params.keys() {
            if !self.template.declares(key) {
                logging::log_param_not_in_template(key, self.template.as_str());
            }
        }
        let known: BTreeMap<String, String> = params
            .iter()
            .filter(|(k, _)| self.template.declares(k))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        let url = self.url_with_params(&known);
        self.history.replace(url);
    }

    fn back(&self) -> bool {
        self.history.len() > 1 && self.history.back()
    }

    fn history_len(&self) -> usize {
        self.history.len()
    }
}
