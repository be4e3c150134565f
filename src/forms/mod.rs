//! Form state for the admin screens.
//!
//! Each form validates field by field into [`FieldErrors`] before anything is
//! sent. A [`FormModal`] drives one form through open, submit and close, and
//! reports outcomes to [`Notifications`].

mod disbursement;
mod errors;
mod modal;
mod notifications;
mod pay_period;
mod position;
mod worker;

pub use disbursement::SingleDisbursementForm;
pub use errors::FieldErrors;
pub use modal::{Form, FormModal, ModalState};
pub use notifications::{Notification, NotificationKind, Notifications};
pub use pay_period::PayPeriodForm;
pub use position::PositionForm;
pub use worker::{INVALID_POSITION_SELECTION, WorkerForm};
