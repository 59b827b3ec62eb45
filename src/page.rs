//! Delete page workflow.
//!
//! Owns the mutable state of one confirmation screen (fetched record info,
//! the operator's master-record choice) and wires the decision logic to the
//! admin API and the external collaborators: navigation, the event sink and
//! the error dialog. Rendering is not this crate's concern; callers consume
//! [`DeletePage::plan`] and present it however they like.

use crate::api::AdminClient;
use crate::config::Config;
use crate::events::{Event, EventBus, ATTACHMENTS_CHANGED};
use crate::fetch::FetchGuard;
use crate::paths::{attachment_parent_payload, delete_target_path};
use crate::plan::{build_plan, default_delete_master, master_choice_offered, DeletePlan};
use crate::records::{RecordInfo, PRIMARY_ALT};
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

/// View name of the record editor, the navigation target after both confirm
/// and cancel.
pub const EDIT_VIEW: &str = "edit";

/// Navigation collaborator: hand the operator over to an admin view.
pub trait AdminNavigator {
    fn go_to_admin_page(&self, view: &str, path: &str, alt: &str);
}

/// Event collaborator: deliver a named notification to interested parts of
/// the admin UI.
pub trait EventSink {
    fn dispatch(&self, name: &str, payload: Value);
}

impl EventSink for EventBus {
    fn dispatch(&self, name: &str, payload: Value) {
        self.emit(Event::new(name, payload));
    }
}

/// Error-dialog collaborator. Failures are forwarded unchanged; the page
/// itself never classifies or retries them.
pub trait ErrorReporter {
    fn report(&self, error: anyhow::Error);
}

/// Navigator that renders admin URLs and logs them. The CLI front end reads
/// the last URL back to show the operator where to continue.
#[derive(Debug, Default)]
pub struct UrlNavigator {
    ui_root: String,
    last_url: std::sync::Mutex<Option<String>>,
}

impl UrlNavigator {
    pub fn new(config: &Config) -> Self {
        Self {
            ui_root: config.ui_root.trim_end_matches('/').to_string(),
            last_url: std::sync::Mutex::new(None),
        }
    }

    pub fn admin_url(&self, view: &str, path: &str, alt: &str) -> String {
        let mut url = format!("{}/{}{}", self.ui_root, view, path);
        if alt != PRIMARY_ALT {
            url.push_str("?alt=");
            url.push_str(alt);
        }
        url
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().expect("navigator lock poisoned").clone()
    }
}

impl AdminNavigator for UrlNavigator {
    fn go_to_admin_page(&self, view: &str, path: &str, alt: &str) {
        let url = self.admin_url(view, path, alt);
        info!("Navigating to {}", url);
        *self.last_url.lock().expect("navigator lock poisoned") = Some(url);
    }
}

/// Error reporter backed by the log; the CLI has no dialog surface.
#[derive(Debug, Default)]
pub struct LogErrorReporter;

impl ErrorReporter for LogErrorReporter {
    fn report(&self, err: anyhow::Error) {
        error!("{:#}", err);
    }
}

/// One delete-confirmation screen for a record at `path`/`alt`.
pub struct DeletePage<'a> {
    api: &'a AdminClient,
    navigator: &'a dyn AdminNavigator,
    events: &'a dyn EventSink,
    errors: &'a dyn ErrorReporter,
    path: String,
    alt: String,
    record_info: Option<RecordInfo>,
    delete_master: bool,
    guard: FetchGuard,
    delete_in_flight: std::sync::atomic::AtomicBool,
}

impl<'a> DeletePage<'a> {
    pub fn new(
        api: &'a AdminClient,
        navigator: &'a dyn AdminNavigator,
        events: &'a dyn EventSink,
        errors: &'a dyn ErrorReporter,
        path: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        let alt = alt.into();
        let delete_master = default_delete_master(&alt);

        Self {
            api,
            navigator,
            events,
            errors,
            path: path.into(),
            alt,
            record_info: None,
            delete_master,
            guard: FetchGuard::new(),
            delete_in_flight: std::sync::atomic::AtomicBool::new(false),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Point the page at a different record. Clears the previous record info,
    /// resets the master-record choice to its default and invalidates any
    /// fetch still in flight.
    pub fn set_record(&mut self, path: impl Into<String>, alt: impl Into<String>) {
        self.path = path.into();
        self.alt = alt.into();
        self.record_info = None;
        self.delete_master = default_delete_master(&self.alt);
        self.guard.invalidate();
    }

    /// Fetch record info for the current path. A response that resolves after
    /// the page moved on (newer fetch, or `set_record`) is discarded.
    pub async fn refresh(&mut self) {
        let ticket = self.guard.begin();
        let path = self.path.clone();

        let result = self.api.get_record_info(&path).await;

        if !self.guard.is_current(ticket) {
            debug!("Discarding stale record info for {}", path);
            return;
        }

        match result {
            Ok(info) => self.record_info = Some(info),
            Err(err) => self.errors.report(err.into()),
        }
    }

    /// Directly supply record info. Test seam, and useful for callers that
    /// fetched it themselves.
    pub fn set_record_info(&mut self, info: RecordInfo) {
        self.record_info = Some(info);
    }

    pub fn record_info(&self) -> Option<&RecordInfo> {
        self.record_info.as_ref()
    }

    /// Change the master-record choice. Ignored unless the current record
    /// actually offers the choice.
    pub fn set_delete_master(&mut self, delete_master: bool) {
        let offered = self
            .record_info
            .as_ref()
            .is_some_and(|info| master_choice_offered(info, &self.alt));

        if offered {
            self.delete_master = delete_master;
        } else {
            debug!("Master-record choice is not offered here; keeping default");
        }
    }

    pub fn delete_master(&self) -> bool {
        self.delete_master
    }

    /// The confirmation plan, or `None` when the page shows nothing (no
    /// record info yet, or the record cannot be deleted).
    pub fn plan(&self) -> Option<DeletePlan> {
        build_plan(self.record_info.as_ref(), &self.alt, self.delete_master)
    }

    /// Execute the deletion. On success, notifies attachment listeners when
    /// an attachment was removed and navigates to the parent's edit view. On
    /// failure, forwards the error to the reporter and leaves the page alive
    /// so the operator can retry.
    ///
    /// A confirm that arrives while one is already in flight is dropped.
    pub async fn confirm(&self) {
        use std::sync::atomic::Ordering;

        let Some(plan) = self.plan() else {
            debug!("Nothing to delete at {}", self.path);
            return;
        };

        if self.delete_in_flight.swap(true, Ordering::AcqRel) {
            warn!("Delete already in flight for {}; ignoring", self.path);
            return;
        }

        let result = self
            .api
            .delete_record(&self.path, &self.alt, plan.delete_master)
            .await;

        self.delete_in_flight.store(false, Ordering::Release);

        match result {
            Ok(()) => {
                if plan.is_attachment {
                    self.events.dispatch(
                        ATTACHMENTS_CHANGED,
                        json!(attachment_parent_payload(&self.path)),
                    );
                }
                let target = delete_target_path(&self.path);
                self.navigator.go_to_admin_page(EDIT_VIEW, &target, &self.alt);
            }
            Err(err) => self.errors.report(err.into()),
        }
    }

    /// Abandon the deletion and return to the record's edit view. No backend
    /// call is made.
    pub fn cancel(&self) {
        self.navigator
            .go_to_admin_page(EDIT_VIEW, &self.path, &self.alt);
    }
}
