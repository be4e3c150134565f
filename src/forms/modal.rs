use std::future::Future;

use tracing::{debug, warn};
use uuid::Uuid;

use super::{FieldErrors, Notification, Notifications};
use crate::error::ConsoleResult;

/// A form a modal can edit and submit.
pub trait Form: Clone + Default {
    /// What the form edits, in sentence case ("Position", "Pay period").
    const SUBJECT: &'static str;

    /// Checks every field, collecting one message per invalid field.
    fn validate(&self) -> Result<(), FieldErrors>;

    /// How the edited record is named in notifications.
    fn display_name(&self) -> String;
}

/// Lifecycle of a create/edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    /// Not shown.
    #[default]
    Closed,
    /// Shown and accepting input.
    Open,
    /// Waiting for the service to answer.
    Submitting,
}

/// A create/edit modal around a [`Form`].
///
/// Submitting validates the form, runs the supplied mutation and reports the
/// outcome through [`Notifications`]. Success closes the modal; any failure
/// leaves it open with the form as the operator left it.
///
/// # Example
///
/// ```
/// use fund_disbursement::forms::{FormModal, ModalState, Notifications, PositionForm};
///
/// # tokio_test_block(async {
/// let toasts = Notifications::new();
/// let mut modal: FormModal<PositionForm> = FormModal::new();
/// modal.open_create();
/// modal.form_mut().name = "SUPERVISOR".to_string();
///
/// let created = modal
///     .submit(&toasts, |form, _editing| async move { Ok(form.name) })
///     .await;
///
/// assert_eq!(created.as_deref(), Some("SUPERVISOR"));
/// assert_eq!(modal.state(), ModalState::Closed);
/// assert_eq!(toasts.latest().unwrap().title, "Position created successfully");
/// # });
/// # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormModal<F> {
    state: ModalState,
    form: F,
    errors: FieldErrors,
    editing: Option<Uuid>,
}

impl<F: Form> FormModal<F> {
    /// Creates a closed modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the modal on a blank form.
    pub fn open_create(&mut self) {
        self.form = F::default();
        self.errors = FieldErrors::new();
        self.editing = None;
        self.state = ModalState::Open;
    }

    /// Opens the modal on an existing record.
    pub fn open_edit(&mut self, uuid: Uuid, form: F) {
        self.form = form;
        self.errors = FieldErrors::new();
        self.editing = Some(uuid);
        self.state = ModalState::Open;
    }

    /// Closes the modal and resets the form.
    pub fn close(&mut self) {
        self.form = F::default();
        self.errors = FieldErrors::new();
        self.editing = None;
        self.state = ModalState::Closed;
    }

    /// Current state.
    pub fn state(&self) -> ModalState {
        self.state
    }

    /// Returns true while the modal is shown.
    pub fn is_open(&self) -> bool {
        self.state != ModalState::Closed
    }

    /// The record being edited; `None` when creating.
    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// The form.
    pub fn form(&self) -> &F {
        &self.form
    }

    /// The form, for input.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Field errors from the last submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validates and submits the form.
    ///
    /// `action` receives a copy of the form and the uuid being edited. Returns
    /// the action's value on success; `None` when the modal was not open, the
    /// form was invalid or the action failed.
    pub async fn submit<T, A, Fut>(&mut self, notifications: &Notifications, action: A) -> Option<T>
    where
        A: FnOnce(F, Option<Uuid>) -> Fut,
        Fut: Future<Output = ConsoleResult<T>>,
    {
        if self.state != ModalState::Open {
            debug!(subject = F::SUBJECT, state = ?self.state, "Submit ignored");
            return None;
        }

        if let Err(errors) = self.form.validate() {
            debug!(subject = F::SUBJECT, fields = errors.len(), "Form rejected");
            self.errors = errors;
            return None;
        }
        self.errors = FieldErrors::new();

        let (done, verb) = match self.editing {
            Some(_) => ("updated", "update"),
            None => ("created", "create"),
        };
        let name = self.form.display_name();

        self.state = ModalState::Submitting;
        match action(self.form.clone(), self.editing).await {
            Ok(value) => {
                notifications.push(Notification::success(
                    format!("{} {done} successfully", F::SUBJECT),
                    Some(format!("{name} has been {done}.")),
                ));
                self.close();
                Some(value)
            }
            Err(error) => {
                warn!(subject = F::SUBJECT, error = %error, "Submit failed");
                notifications.push(Notification::error(
                    format!("Failed to {verb} {}", F::SUBJECT.to_lowercase()),
                    Some(error.user_message()),
                ));
                self.state = ModalState::Open;
                None
            }
        }
    }
}
