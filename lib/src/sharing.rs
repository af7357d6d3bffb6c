//! Decides what the sharing section says about a managed instance.
//!
//! The decision is a fixed table of rules walked top to bottom. Primary rules
//! describe the instance's role and only the first one that matches is used;
//! independent rules add notices on top of whatever the primary rule said. A
//! rule marked `Stop` ends the walk, trailing notices included.

use crate::model::{SharingStatus, UsageSummaryEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharingNotice<'a> {
    SharedFrom { space: &'a str, org: &'a str },
    SharedTo(&'a [UsageSummaryEntry]),
    NotShared,
    FeatureFlagDisabled,
    OfferingDisablesSharing,
}

#[derive(Clone, Copy)]
enum Scope {
    Primary,
    Independent,
}

#[derive(Clone, Copy)]
enum After {
    Continue,
    Stop,
}

struct Rule {
    scope: Scope,
    after: After,
    applies: fn(&SharingStatus) -> bool,
    notice: for<'a> fn(&'a SharingStatus) -> SharingNotice<'a>,
}

const RULES: &[Rule] = &[
    Rule {
        scope: Scope::Primary,
        after: After::Stop,
        applies: |s| s.is_shared_from_original_space,
        notice: shared_from,
    },
    Rule {
        scope: Scope::Primary,
        after: After::Continue,
        applies: |s| s.is_shared_to_other_spaces,
        notice: shared_to,
    },
    Rule {
        scope: Scope::Primary,
        after: After::Continue,
        applies: |_| true,
        notice: |_| SharingNotice::NotShared,
    },
    Rule {
        scope: Scope::Independent,
        after: After::Continue,
        applies: |s| s.feature_flag_disabled,
        notice: |_| SharingNotice::FeatureFlagDisabled,
    },
    Rule {
        scope: Scope::Independent,
        after: After::Continue,
        applies: |s| s.offering_disables_sharing,
        notice: |_| SharingNotice::OfferingDisablesSharing,
    },
];

fn shared_from(status: &SharingStatus) -> SharingNotice<'_> {
    SharingNotice::SharedFrom {
        space: &status.origin_space_name,
        org: &status.origin_org_name,
    }
}

fn shared_to(status: &SharingStatus) -> SharingNotice<'_> {
    SharingNotice::SharedTo(&status.usage_summary)
}

/// Notices to print, in order.
pub fn notices(status: &SharingStatus) -> Vec<SharingNotice<'_>> {
    let mut notices = Vec::new();
    let mut primary_matched = false;

    for rule in RULES {
        let primary = matches!(rule.scope, Scope::Primary);
        if primary && primary_matched {
            continue;
        }
        if !(rule.applies)(status) {
            continue;
        }
        primary_matched |= primary;
        notices.push((rule.notice)(status));
        if matches!(rule.after, After::Stop) {
            break;
        }
    }

    notices
}
