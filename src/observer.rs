// ---------------------------------------------------------------------------
// Observer interface for labeling-run events
// ---------------------------------------------------------------------------

/// Informational events emitted while marking a series.
///
/// None of these abort the run; hard failures are returned as
/// [`MarkError`](crate::MarkError) instead.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkEvent {
    /// An absorption point was skipped because its window was rejected by
    /// the strict edge policy.
    PositiveSkipped { frequency: f64, center: usize },
    /// Fewer negative candidates existed than positives; the dataset is
    /// returned unbalanced.
    NegativeShortfall { wanted: usize, found: usize },
    /// A labeling run completed.
    Marked { positives: usize, negatives: usize },
}

/// Callback surface injected into the sampler.
pub trait MarkObserver {
    fn on_event(&mut self, event: &MarkEvent);
}

/// Forwards events to the `log` crate. The default observer.
#[derive(Debug, Default)]
pub struct LogObserver;

impl MarkObserver for LogObserver {
    fn on_event(&mut self, event: &MarkEvent) {
        match event {
            MarkEvent::PositiveSkipped { frequency, center } => {
                log::info!("skipped absorption point at {frequency} (center index {center}): window out of range");
            }
            MarkEvent::NegativeShortfall { wanted, found } => {
                log::warn!("only {found} of {wanted} negative windows available; dataset is unbalanced");
            }
            MarkEvent::Marked {
                positives,
                negatives,
            } => {
                log::info!("created {positives} positive and {negatives} negative windows");
            }
        }
    }
}

/// Discards all events. Useful in tests.
#[derive(Debug, Default)]
pub struct NullObserver;

impl MarkObserver for NullObserver {
    fn on_event(&mut self, _event: &MarkEvent) {}
}

/// Records events for later inspection.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub events: Vec<MarkEvent>,
}

impl MarkObserver for RecordingObserver {
    fn on_event(&mut self, event: &MarkEvent) {
        self.events.push(event.clone());
    }
}
