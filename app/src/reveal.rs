//! Reveal effect - fades an element in the first time it becomes visible
//!
//! The host (a UI toolkit, a web view bridge) owns the actual visibility
//! observer and reports intersection ratios; this type decides when to
//! reveal and when to let the observer go.

/// Distance in pixels a hidden element sits below its settled position
const HIDDEN_OFFSET_PX: f64 = 20.0;
const TRANSITION_MS: u64 = 700;

/// Handle to whatever watches the element's visibility
pub trait VisibilityObserver {
    /// Stop observing. Called at most once per observer.
    fn disconnect(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must be visible, 0.0 to 1.0
    pub threshold: f64,
    /// Delay before the transition starts
    pub delay_ms: u64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            delay_ms: 0,
        }
    }
}

/// Style values the host applies to the element
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub opacity: f64,
    pub offset_y_px: f64,
    pub transition: String,
}

pub struct Reveal<O: VisibilityObserver> {
    options: RevealOptions,
    observer: Option<O>,
    revealed: bool,
}

impl<O: VisibilityObserver> Reveal<O> {
    /// Attach to a freshly mounted element. It starts hidden.
    pub fn attach(observer: O, options: RevealOptions) -> Self {
        Self {
            options,
            observer: Some(observer),
            revealed: false,
        }
    }

    /// Feed one intersection report. Returns true when this call revealed
    /// the element.
    pub fn on_intersection(&mut self, visible_ratio: f64) -> bool {
        if self.revealed {
            return false;
        }
        let intersecting = visible_ratio > 0.0 && visible_ratio >= self.options.threshold;
        if !intersecting {
            return false;
        }

        self.revealed = true;
        self.release();
        tracing::debug!(visible_ratio, delay_ms = self.options.delay_ms, "element revealed");
        true
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_observing(&self) -> bool {
        self.observer.is_some()
    }

    pub fn style(&self) -> RevealStyle {
        let (opacity, offset_y_px) = if self.revealed {
            (1.0, 0.0)
        } else {
            (0.0, HIDDEN_OFFSET_PX)
        };
        let delay = self.options.delay_ms;
        RevealStyle {
            opacity,
            offset_y_px,
            transition: format!(
                "opacity {ms}ms ease-out {delay}ms, transform {ms}ms ease-out {delay}ms",
                ms = TRANSITION_MS,
            ),
        }
    }

    fn release(&mut self) {
        if let Some(mut observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl<O: VisibilityObserver> Drop for Reveal<O> {
    fn drop(&mut self) {
        self.release();
    }
}
