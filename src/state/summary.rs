#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use url::Url;

use crate::state::toast::Toast;

/// Where the summary request currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SummaryPhase {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Failure,
}

/// Reactive model behind the dashboard's summary form.
///
/// Lifecycle: `Idle → Submitting → Success | Failure`, re-entering
/// `Submitting` on the next valid submit. Editing the URL after a result
/// returns the display to `Idle` without clearing the input.
#[derive(Clone, Debug, Default)]
pub struct SummaryState {
    pub video_url: String,
    pub phase: SummaryPhase,
    pub copied: bool,
}

impl SummaryState {
    /// Update the URL input. A lingering result (success or failure) is
    /// cleared back to idle; the text the user typed stays.
    pub fn set_url(&mut self, value: String) {
        self.video_url = value;
        if matches!(self.phase, SummaryPhase::Success(_) | SummaryPhase::Failure) {
            self.phase = SummaryPhase::Idle;
            self.copied = false;
        }
    }

    /// Validate the current input and, if it is a YouTube URL, enter
    /// `Submitting`. On rejection no request may be issued; the error toast
    /// to show is returned instead.
    pub fn begin_submit(&mut self) -> Result<String, Toast> {
        if !is_youtube_url(&self.video_url) {
            return Err(Toast::url_invalid());
        }
        self.phase = SummaryPhase::Submitting;
        self.copied = false;
        Ok(self.video_url.clone())
    }

    pub fn complete_success(&mut self, summary: String) -> Toast {
        self.phase = SummaryPhase::Success(summary);
        Toast::summary_success()
    }

    /// Any failure (network, non-2xx, malformed body) lands here; the cause
    /// is not surfaced to the user.
    pub fn complete_failure(&mut self) -> Toast {
        self.phase = SummaryPhase::Failure;
        Toast::summary_failed()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SummaryPhase::Submitting
    }

    /// The displayed summary, when there is one.
    pub fn summary_text(&self) -> Option<&str> {
        match &self.phase {
            SummaryPhase::Success(text) => Some(text),
            _ => None,
        }
    }
}

/// A well-formed URL whose host contains `youtube.com` or `youtu.be`.
pub fn is_youtube_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    url.host_str()
        .is_some_and(|host| host.contains("youtube.com") || host.contains("youtu.be"))
}
