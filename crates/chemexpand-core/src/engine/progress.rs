#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    /// `None` when the number of steps is not known up front, as with unsized streams.
    TaskStart { total_steps: Option<u64> },
    TaskIncrement,
    TaskFinish,

    /// A note about a single step, such as a skipped line.
    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
    total_steps: Option<u64>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
            total_steps: None,
        }
    }

    /// Declares how many steps the next task will take, when the caller knows it.
    pub fn with_total_steps(mut self, total: u64) -> Self {
        self.total_steps = Some(total);
        self
    }

    pub fn total_steps(&self) -> Option<u64> {
        self.total_steps
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn reporter_without_callback_is_silent() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::TaskIncrement);
    }

    #[test]
    fn reporter_forwards_events_to_callback() {
        let seen = Mutex::new(Vec::new());
        let reporter = ProgressReporter::with_callback(Box::new(|event| {
            seen.lock().unwrap().push(format!("{event:?}"));
        }));

        reporter.report(Progress::PhaseStart { name: "Expand" });
        reporter.report(Progress::TaskIncrement);
        drop(reporter);

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("Expand"));
        assert_eq!(seen[1], "TaskIncrement");
    }

    #[test]
    fn total_steps_is_unknown_unless_declared() {
        assert_eq!(ProgressReporter::new().total_steps(), None);
        let reporter = ProgressReporter::with_callback(Box::new(|_| {})).with_total_steps(12);
        assert_eq!(reporter.total_steps(), Some(12));
    }
}
