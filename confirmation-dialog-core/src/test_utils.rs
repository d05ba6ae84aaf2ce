//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{DialogError, DialogResult};
use crate::services::ConfirmationDialog;
use crate::traits::{ConfirmerFactory, RenderAdapter, RenderContext, SessionStore};
use crate::types::{Confirmer, HandlerError, Params};

// ===== CountingConfirmerFactory =====

pub struct CountingConfirmerFactory {
    created: Mutex<Vec<String>>,
}

impl CountingConfirmerFactory {
    pub fn new() -> Self {
        Self {
            created: Mutex::new(Vec::new()),
        }
    }

    /// How many times `create` ran for `name`
    pub fn created_count(&self, name: &str) -> usize {
        self.created
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.as_str() == name)
            .count()
    }

    pub fn total_created(&self) -> usize {
        self.created.lock().unwrap().len()
    }
}

impl ConfirmerFactory for CountingConfirmerFactory {
    fn create(&self, name: &str, template_file: Option<&Path>) -> Confirmer {
        self.created.lock().unwrap().push(name.to_string());
        Confirmer::new(name, template_file.map(Path::to_path_buf))
    }
}

// ===== RecordingRenderAdapter =====

/// Snapshot of one render call
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedView {
    pub active: Option<String>,
    pub heading: Option<String>,
    pub question: Option<String>,
    pub layout_path: PathBuf,
    pub template_path: PathBuf,
    pub ajax: bool,
    pub redraw: bool,
}

pub struct RecordingRenderAdapter {
    views: RefCell<Vec<RenderedView>>,
    /// 如果 Some，render 时对此路径返回 MissingTemplate
    missing: Option<PathBuf>,
}

impl RecordingRenderAdapter {
    pub fn new() -> Self {
        Self {
            views: RefCell::new(Vec::new()),
            missing: None,
        }
    }

    pub fn with_missing_template(path: impl Into<PathBuf>) -> Self {
        Self {
            views: RefCell::new(Vec::new()),
            missing: Some(path.into()),
        }
    }

    pub fn last(&self) -> Option<RenderedView> {
        self.views.borrow().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.views.borrow().len()
    }
}

impl RenderAdapter for RecordingRenderAdapter {
    fn render(&self, ctx: &RenderContext<'_>) -> DialogResult<String> {
        if let Some(missing) = &self.missing {
            if missing == ctx.layout_path || missing == ctx.template_path {
                return Err(DialogError::MissingTemplate(missing.display().to_string()));
            }
        }

        let view = RenderedView {
            active: ctx.active.map(|a| a.name().to_string()),
            heading: ctx.active.map(|a| a.heading()),
            question: ctx.active.map(|a| a.question()),
            layout_path: ctx.layout_path.to_path_buf(),
            template_path: ctx.template_path.to_path_buf(),
            ajax: ctx.ajax,
            redraw: ctx.redraw,
        };
        let output = match (&view.heading, &view.question) {
            (Some(h), Some(q)) => format!("<h1>{h}</h1><p>{q}</p>"),
            _ => String::new(),
        };
        self.views.borrow_mut().push(view);
        Ok(output)
    }
}

// ===== FailingSessionStore =====

pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn get(&self, _key: &str) -> DialogResult<Option<Value>> {
        Err(DialogError::StorageError("session backend unavailable".to_string()))
    }

    async fn put(&self, _key: &str, _value: Value) -> DialogResult<()> {
        Err(DialogError::StorageError("session backend unavailable".to_string()))
    }

    async fn remove(&self, _key: &str) -> DialogResult<()> {
        Err(DialogError::StorageError("session backend unavailable".to_string()))
    }
}

// ===== 工厂方法 =====

/// 创建测试用 `ConfirmationDialog`
pub fn create_test_dialog() -> (ConfirmationDialog, Arc<CountingConfirmerFactory>) {
    let factory = Arc::new(CountingConfirmerFactory::new());
    let dialog = ConfirmationDialog::new("page-confirmDialog", factory.clone());
    (dialog, factory)
}

/// Shared record of handler invocations
pub type HandlerCalls = Arc<Mutex<Vec<Params>>>;

/// Handler that records the params of every invocation
pub fn recording_handler() -> (
    impl Fn(&Params) -> Result<(), HandlerError> + Send + Sync + 'static,
    HandlerCalls,
) {
    let calls: HandlerCalls = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&calls);
    let handler = move |params: &Params| -> Result<(), HandlerError> {
        recorded.lock().unwrap().push(params.clone());
        Ok(())
    };
    (handler, calls)
}

/// Build params from `(key, value)` pairs
pub fn params<const N: usize>(pairs: [(&str, Value); N]) -> Params {
    pairs
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
