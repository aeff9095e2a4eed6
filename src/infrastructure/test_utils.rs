/// Test utilities for controller-level tests
///
/// Provides a controller pinned to a fixed "today", plus recording doubles for
/// the listener and renderer seams so tests can assert on what the host would
/// have seen.
///
/// ## Usage Examples
///
/// ```ignore
/// use crate::infrastructure::test_utils::test_harness::TestPicker;
///
/// #[test]
/// fn my_test() {
///     let mut picker = TestPicker::on(2024, 1, 15);
///     picker.controller.navigate_relative(1).unwrap();
///     assert_eq!(picker.renderer.views().len(), 2);
/// }
/// ```
#[cfg(test)]
pub mod test_harness {
    use crate::application::{Config, MonthViewController};
    use crate::domain::{MonthKey, SelectionChange};
    use crate::infrastructure::{
        DateSelectedListener, FixedClock, MonthRenderer, MonthView, SelectionContext,
    };
    use anyhow::Result;
    use chrono::{NaiveDate, Weekday};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Listener that remembers every date it was told about
    #[derive(Clone, Default)]
    pub struct RecordingListener {
        seen: Rc<RefCell<Vec<SelectionContext>>>,
    }

    impl RecordingListener {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn dates(&self) -> Vec<NaiveDate> {
            self.seen.borrow().iter().map(|c| c.date).collect()
        }

        pub fn contexts(&self) -> Vec<SelectionContext> {
            self.seen.borrow().clone()
        }
    }

    impl DateSelectedListener for RecordingListener {
        fn on_date_selected(&self, context: &SelectionContext) -> Result<()> {
            self.seen.borrow_mut().push(context.clone());
            Ok(())
        }

        fn name(&self) -> &str {
            "Recorder"
        }
    }

    /// Renderer that keeps every view and selection change it receives
    #[derive(Clone, Default)]
    pub struct RecordingRenderer {
        views: Rc<RefCell<Vec<MonthView>>>,
        changes: Rc<RefCell<Vec<SelectionChange>>>,
    }

    impl RecordingRenderer {
        pub fn views(&self) -> Vec<MonthView> {
            self.views.borrow().clone()
        }

        pub fn last_view(&self) -> Option<MonthView> {
            self.views.borrow().last().cloned()
        }

        pub fn changes(&self) -> Vec<SelectionChange> {
            self.changes.borrow().clone()
        }
    }

    impl MonthRenderer for RecordingRenderer {
        fn render_month(&mut self, view: &MonthView) -> Result<()> {
            self.views.borrow_mut().push(view.clone());
            Ok(())
        }

        fn render_selection(&mut self, change: &SelectionChange) -> Result<()> {
            self.changes.borrow_mut().push(*change);
            Ok(())
        }
    }

    /// A controller pinned to a fixed "today", wired to recorders and already
    /// rendered once
    pub struct TestPicker {
        pub controller: MonthViewController,
        pub listener: RecordingListener,
        pub renderer: RecordingRenderer,
    }

    impl TestPicker {
        pub fn on(year: i32, month: u32, day: u32) -> Self {
            Self::with_config(year, month, day, Config::default())
        }

        pub fn with_config(year: i32, month: u32, day: u32, config: Config) -> Self {
            let today = date(year, month, day);
            let listener = RecordingListener::new();
            let renderer = RecordingRenderer::default();

            let mut controller = MonthViewController::with_clock(&config, Box::new(FixedClock(today)))
                .expect("test month should be valid");
            controller.set_listener(listener.clone());
            controller.set_renderer(renderer.clone());
            let opening = controller.current_month();
            controller.go_to_month(opening);

            Self {
                controller,
                listener,
                renderer,
            }
        }

        pub fn monday_first(year: i32, month: u32, day: u32) -> Self {
            let config = Config {
                first_day_of_week: Weekday::Mon,
                ..Config::default()
            };
            Self::with_config(year, month, day, config)
        }
    }

    pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    /// Zero-based month, unlike `date`.
    pub fn month(year: i32, month0: u32) -> MonthKey {
        MonthKey::new(year, month0).expect("valid test month")
    }
}

#[cfg(test)]
mod tests {
    use super::test_harness::*;

    #[test]
    fn harness_renders_the_opening_month() {
        let picker = TestPicker::on(2024, 1, 15);
        assert_eq!(picker.controller.current_month(), month(2024, 0));
        assert_eq!(picker.renderer.views().len(), 1);
        assert!(picker.listener.dates().is_empty());
    }
}
