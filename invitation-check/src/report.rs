use anyhow::Context;
use log::{debug, info};
use std::fmt;
use std::fs;
use std::path::Path;

use meetup_shared::error::Result;
use meetup_shared::models::{parse_invitation_list, InvitationResponse};

use crate::config::CheckConfig;

/// Parses a document holding either one invitation or an array of them.
pub fn parse_document(contents: &str, list_mode: bool) -> Result<Vec<InvitationResponse>> {
    if list_mode || contents.trim_start().starts_with('[') {
        parse_invitation_list(contents)
    } else {
        InvitationResponse::from_json(contents).map(|invitation| vec![invitation])
    }
}

pub fn check_file(path: &Path, config: &CheckConfig) -> anyhow::Result<Vec<InvitationResponse>> {
    debug!("Checking {}", path.display());

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let invitations = parse_document(&contents, config.list_mode)
        .with_context(|| format!("invalid invitation payload in {}", path.display()))?;

    info!("{}: {} invitation(s) valid", path.display(), invitations.len());
    Ok(invitations)
}

pub fn summary_line(invitation: &InvitationResponse) -> String {
    format!(
        "#{} user={} meetup={} owner={} <{}> day={} temp={} status={}",
        invitation.id(),
        invitation.user_id,
        invitation.meetup_id,
        invitation.meetup_owner_name,
        invitation.meetup_owner_email,
        invitation.meetup_day,
        invitation.meetup_temperature,
        invitation.status
    )
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckSummary {
    pub valid_files: usize,
    pub invalid_files: usize,
    pub invitations: usize,
    pub pending_invitations: usize,
    pub answered_invitations: usize,
}

impl CheckSummary {
    pub fn record_valid(&mut self, invitations: &[InvitationResponse]) {
        self.valid_files += 1;
        self.invitations += invitations.len();
        for invitation in invitations {
            if invitation.status.is_answered() {
                self.answered_invitations += 1;
            } else {
                self.pending_invitations += 1;
            }
        }
    }

    pub fn record_invalid(&mut self) {
        self.invalid_files += 1;
    }

    pub fn is_success(&self) -> bool {
        self.invalid_files == 0
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} valid file(s), {} invalid file(s), {} invitation(s), {} pending, {} answered",
            self.valid_files,
            self.invalid_files,
            self.invitations,
            self.pending_invitations,
            self.answered_invitations
        )
    }
}
