use crate::domain::MonthKey;
use anyhow::Result;
use chrono::NaiveDate;
use log::warn;

/// Context provided to date-selected listeners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionContext {
    pub date: NaiveDate,
    pub month: MonthKey,
    pub previous: Option<NaiveDate>,
}

/// Trait for plugins that respond to confirmed selections
pub trait DateSelectedListener {
    /// Called once per successful `select_day`
    fn on_date_selected(&self, context: &SelectionContext) -> Result<()>;

    /// Human-readable name for this listener
    fn name(&self) -> &str;
}

/// Adapts a closure into a listener.
pub struct FnListener<F> {
    name: String,
    callback: F,
}

impl<F> FnListener<F>
where
    F: Fn(NaiveDate),
{
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<F> DateSelectedListener for FnListener<F>
where
    F: Fn(NaiveDate),
{
    fn on_date_selected(&self, context: &SelectionContext) -> Result<()> {
        (self.callback)(context.date);
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Registry for managing date-selected listeners
pub struct ListenerRegistry {
    listeners: Vec<Box<dyn DateSelectedListener>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Register a new listener
    pub fn register<L>(&mut self, listener: L)
    where
        L: DateSelectedListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Drop every listener and keep only `listener`
    pub fn replace<L>(&mut self, listener: L)
    where
        L: DateSelectedListener + 'static,
    {
        self.listeners.clear();
        self.register(listener);
    }

    /// Notify all registered listeners of a selection
    pub fn notify(&self, context: &SelectionContext) {
        for listener in &self.listeners {
            if let Err(e) = listener.on_date_selected(context) {
                warn!("Listener '{}' failed: {:#}", listener.name(), e);
                // Continue with other listeners even if one fails
            }
        }
    }

    /// List all registered listeners
    pub fn list_listeners(&self) -> Vec<&str> {
        self.listeners.iter().map(|l| l.name()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for ListenerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::test_utils::test_harness::RecordingListener;

    struct FailingListener;

    impl DateSelectedListener for FailingListener {
        fn on_date_selected(&self, _context: &SelectionContext) -> Result<()> {
            anyhow::bail!("disk full")
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    fn context() -> SelectionContext {
        SelectionContext {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            month: MonthKey::new(2024, 0).unwrap(),
            previous: None,
        }
    }

    #[test]
    fn failing_listener_does_not_stop_the_rest() {
        let recorder = RecordingListener::new();
        let mut registry = ListenerRegistry::new();
        registry.register(FailingListener);
        registry.register(recorder.clone());

        registry.notify(&context());

        assert_eq!(recorder.dates(), vec![context().date]);
    }

    #[test]
    fn replace_keeps_a_single_listener() {
        let mut registry = ListenerRegistry::new();
        registry.register(FailingListener);
        registry.register(RecordingListener::new());
        registry.replace(FnListener::new("Closure", |_| {}));

        assert_eq!(registry.list_listeners(), vec!["Closure"]);
    }

    #[test]
    fn fn_listener_receives_the_date() {
        let seen = std::rc::Rc::new(std::cell::Cell::new(None));
        let sink = seen.clone();
        let listener = FnListener::new("Closure", move |date| sink.set(Some(date)));

        listener.on_date_selected(&context()).unwrap();

        assert_eq!(seen.get(), Some(context().date));
    }
}
