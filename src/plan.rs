//! Delete-confirmation decision logic.
//!
//! Everything here is a pure function of the fetched [`RecordInfo`], the alt
//! selector and the operator's master-record choice. The page layer owns the
//! mutable state; this module only derives what the confirmation screen must
//! offer.

use crate::records::{RecordInfo, PRIMARY_ALT};

/// What the delete-confirmation screen shows for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePlan {
    /// Whether the master record (primary plus all alternatives) is deleted,
    /// as opposed to the selected alternative only.
    pub delete_master: bool,
    /// Whether the operator may flip `delete_master`. Only offered on the
    /// primary alt of a record that has more than one existing variant.
    pub master_choice_offered: bool,
    /// Record has more than one existing language variant.
    pub has_alts: bool,
    /// The record being deleted is an attachment.
    pub is_attachment: bool,
    /// Show the list of alternatives that will be deleted.
    pub show_alternatives: bool,
    /// Show the list of child pages that will be deleted.
    pub show_children: bool,
    /// Show the list of attachments that will be deleted.
    pub show_attachments: bool,
}

/// Default master-record choice for an alt selector: deleting from the
/// primary variant deletes the master record, deleting from a specific
/// alternative deletes that alternative only.
pub fn default_delete_master(alt: &str) -> bool {
    alt == PRIMARY_ALT
}

/// Whether the master-record choice may be overridden by the operator.
pub fn master_choice_offered(info: &RecordInfo, alt: &str) -> bool {
    info.has_alts() && alt == PRIMARY_ALT
}

/// Build the confirmation plan, or `None` when there is nothing to confirm.
///
/// Absent record info and `can_be_deleted == false` are terminal: the page
/// renders nothing and never issues a delete for such a record.
pub fn build_plan(info: Option<&RecordInfo>, alt: &str, delete_master: bool) -> Option<DeletePlan> {
    let info = info?;
    if !info.can_be_deleted {
        return None;
    }

    let has_alts = info.has_alts();
    let primary = alt == PRIMARY_ALT;
    // The choice is only free on the primary alt of a multi-variant record;
    // otherwise the default is binding.
    let delete_master = if !primary {
        false
    } else if !has_alts {
        true
    } else {
        delete_master
    };

    Some(DeletePlan {
        delete_master,
        master_choice_offered: has_alts && primary,
        has_alts,
        is_attachment: info.is_attachment,
        show_alternatives: delete_master && has_alts && primary && !info.alts.is_empty(),
        show_children: delete_master && !info.children.is_empty(),
        show_attachments: delete_master && !info.attachments.is_empty(),
    })
}
