use reqwest::StatusCode;

/// The raw outcome of a successful write: the status the backend answered
/// with, and the decoded body.
///
/// Pages branch on the exact status (201 for creation, 200 for update and
/// delete), so it is kept alongside the body rather than discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResponse<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T> MutationResponse<T> {
    pub fn is_created(&self) -> bool {
        self.status == StatusCode::CREATED
    }

    pub fn is_ok(&self) -> bool {
        self.status == StatusCode::OK
    }
}
