pub use action::UpdateAddress;
pub use controller::shipping_address::ShippingAddressForm;
pub use controller::submission::{SubmissionCoordinator, NEXT_STEP};
pub use controller::{SubmitOutcome, SubmitState};
pub use router::{MemoryRouter, Navigator};
pub use toast::{Toast, ToastQueue, ToastVariant, Toaster};
pub use validate::{validate_shipping_address, FieldErrors};

pub mod action;
pub mod controller;
pub mod models;
pub mod router;
pub mod toast;
pub mod validate;
