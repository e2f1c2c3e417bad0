use crate::config::notification as cfg;

/// Notification severity, mapped to a suffixed CSS class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    /// Class suffix (`wallet-notification-{suffix}`).
    pub fn class_suffix(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// A transient user-facing message.
///
/// Each notification becomes an independent, unowned DOM element with a
/// fixed three-stage lifecycle; see [`Notification::lifecycle`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    message: String,
    severity: Severity,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, Severity::Info)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Full class attribute for the notification element.
    pub fn class_name(&self) -> String {
        format!(
            "{} {}-{}",
            cfg::BASE_CLASS,
            cfg::BASE_CLASS,
            self.severity.class_suffix()
        )
    }

    /// The timed lifecycle every notification element walks through
    /// after insertion: reveal shortly after insertion (so the CSS
    /// transition animates from the hidden frame), fade after the
    /// visible hold, dispose after the fade completes.
    ///
    /// Expressed as data so tests can check the schedule without
    /// waiting on real clocks; the browser driver walks it with timer
    /// futures.
    pub fn lifecycle() -> [LifecycleStep; 3] {
        [
            LifecycleStep {
                delay_ms: cfg::REVEAL_DELAY_MS,
                action: LifecycleAction::Reveal,
            },
            LifecycleStep {
                delay_ms: cfg::VISIBLE_MS,
                action: LifecycleAction::Fade,
            },
            LifecycleStep {
                delay_ms: cfg::FADE_MS,
                action: LifecycleAction::Dispose,
            },
        ]
    }
}

/// Class mutation applied at each lifecycle stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    /// Add the `show` class.
    Reveal,
    /// Remove the `show` class.
    Fade,
    /// Remove the element from the document.
    Dispose,
}

/// One timed stage: wait `delay_ms` after the previous stage, then apply
/// `action`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifecycleStep {
    pub delay_ms: u32,
    pub action: LifecycleAction,
}
