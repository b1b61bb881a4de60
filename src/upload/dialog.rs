//! State of one upload dialog: Closed -> Open -> Submitting -> Closed | Open.

use super::draft::{UploadDraft, ValidDraft};
use super::pipeline::{UploadError, UploadReceipt};
use crate::catalog::ContentKind;

#[derive(Debug, Clone, PartialEq)]
pub enum DialogPhase {
    Closed,
    Open { error: Option<String> },
    Submitting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadDialog {
    kind: ContentKind,
    phase: DialogPhase,
    draft: UploadDraft,
}

impl UploadDialog {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            phase: DialogPhase::Closed,
            draft: UploadDraft::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.phase, DialogPhase::Closed)
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, DialogPhase::Submitting)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            DialogPhase::Open { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn draft(&self) -> &UploadDraft {
        &self.draft
    }

    pub fn open(&mut self) {
        if self.phase == DialogPhase::Closed {
            self.draft = UploadDraft::default();
            self.phase = DialogPhase::Open { error: None };
        }
    }

    /// Close and discard the draft. Refused while a submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.draft = UploadDraft::default();
        self.phase = DialogPhase::Closed;
        true
    }

    /// Edit the draft; ignored unless the dialog is open and idle.
    pub fn edit(&mut self, change: impl FnOnce(&mut UploadDraft)) {
        if matches!(self.phase, DialogPhase::Open { .. }) {
            change(&mut self.draft);
        }
    }

    /// Validate and move to Submitting. A failed validation keeps the dialog
    /// open with the error shown and never reaches the network.
    pub fn begin_submit(&mut self) -> Result<ValidDraft, UploadError> {
        match self.phase {
            DialogPhase::Open { .. } => {}
            DialogPhase::Submitting => return Err(UploadError::InProgress),
            DialogPhase::Closed => return Err(UploadError::DialogClosed),
        }

        match self.draft.validate(self.kind) {
            Ok(valid) => {
                self.phase = DialogPhase::Submitting;
                Ok(valid)
            }
            Err(err) => {
                self.phase = DialogPhase::Open {
                    error: Some(err.to_string()),
                };
                Err(err.into())
            }
        }
    }

    /// Apply the outcome of a submission started with [`Self::begin_submit`].
    pub fn finish(&mut self, outcome: &Result<UploadReceipt, UploadError>) {
        if !self.is_submitting() {
            return;
        }
        match outcome {
            Ok(_) => {
                self.draft = UploadDraft::default();
                self.phase = DialogPhase::Closed;
            }
            Err(err) => {
                self.phase = DialogPhase::Open {
                    error: Some(err.to_string()),
                };
            }
        }
    }
}
