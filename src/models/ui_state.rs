//! Closed sets of screen states.

use super::job::Job;
use crate::errors::AppResult;

/// List screens: home feed and friends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiState<T> {
    Loading,
    Success(T),
    Empty,
    Error(String),
}

impl<T> UiState<Vec<T>> {
    /// Failed → `Error`, zero results → `Empty`, otherwise `Success`.
    pub fn from_result(result: AppResult<Vec<T>>) -> Self {
        match result {
            Ok(items) if items.is_empty() => UiState::Empty,
            Ok(items) => UiState::Success(items),
            Err(e) => UiState::Error(e.to_string()),
        }
    }
}

impl<T> UiState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, UiState::Loading)
    }
}

/// Job details never has an empty variant: a missing job is an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobDetailsUiState {
    Loading,
    Success(Box<Job>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavePreferencesState {
    Idle,
    Loading,
    Success,
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[test]
    fn from_result_maps_each_outcome() {
        assert_eq!(UiState::<Vec<i32>>::from_result(Ok(vec![])), UiState::Empty);
        assert_eq!(UiState::from_result(Ok(vec![1, 2])), UiState::Success(vec![1, 2]));
        assert_eq!(
            UiState::<Vec<i32>>::from_result(Err(AppError::JobNotFound(7))),
            UiState::Error("Job not found: 7".into())
        );
    }
}
