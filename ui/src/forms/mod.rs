//! Round and prediction forms plus the stamping they share on submission.

mod prediction;
pub use prediction::PredictionForm;

mod round;
pub use round::RoundActionForm;

mod stamp;
pub use stamp::{FormField, RoundStamp};

/// Id of the form element on both the round and the prediction page.
pub const FORM_ID: &str = "rdaction";

/// Hidden inputs the server reads (`id`, POST name).
pub const ROUND_STARTS: (&str, &str) = ("roundstarts", "time_round_start");
pub const ROUND_ENDS: (&str, &str) = ("roundends", "time_round_end");
pub const TIME_ELAPSED: (&str, &str) = ("timeelapsed", "time_elapsed");
pub const ACTION: (&str, &str) = ("actionhid", "action");
pub const PREDICTION: (&str, &str) = ("prediction", "prediction");
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

/// Progress of a submission, rendered under the form.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}
