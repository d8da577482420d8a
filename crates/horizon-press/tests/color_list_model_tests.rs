//! Tests for the color list projection and its change notifications.

use std::sync::Arc;

use parking_lot::Mutex;

use horizon_press::document::{ColorDef, ColorList, Document, Unit};
use horizon_press::model::{
    ColorEntry, ColorListModel, ItemModel, ItemRole, ModelIndex, SortRule, ViewNotifier,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    AboutToReset,
    Reset,
    AboutToInsert(usize, usize),
    Inserted(usize, usize),
    AboutToRemove(usize, usize),
    Removed(usize, usize),
    Mutated,
}

#[derive(Default)]
struct RecordingNotifier {
    events: Mutex<Vec<Event>>,
}

impl RecordingNotifier {
    fn take(&self) -> Vec<Event> {
        std::mem::take(&mut *self.events.lock())
    }

    fn bracket(&self, before: Event, after: Event, mutate: &mut dyn FnMut()) {
        self.events.lock().push(before);
        mutate();
        let mut events = self.events.lock();
        events.push(Event::Mutated);
        events.push(after);
    }
}

impl ViewNotifier for RecordingNotifier {
    fn reset(&self, mutate: &mut dyn FnMut()) {
        self.bracket(Event::AboutToReset, Event::Reset, mutate);
    }

    fn insert_rows(&self, first: usize, last: usize, mutate: &mut dyn FnMut()) {
        self.bracket(
            Event::AboutToInsert(first, last),
            Event::Inserted(first, last),
            mutate,
        );
    }

    fn remove_rows(&self, first: usize, last: usize, mutate: &mut dyn FnMut()) {
        self.bracket(
            Event::AboutToRemove(first, last),
            Event::Removed(first, last),
            mutate,
        );
    }
}

fn hue_palette() -> ColorList {
    let mut colors = ColorList::new();
    // Hues 10, 200 and 90 degrees.
    colors.insert("A Orange", ColorDef::rgb(255, 43, 0));
    colors.insert("B Azure", ColorDef::rgb(0, 170, 255));
    colors.insert("C Chartreuse", ColorDef::rgb(127, 254, 0));
    colors
}

fn slate() -> ColorEntry {
    ColorEntry::new("Slate", ColorDef::rgb(112, 128, 144), None)
}

fn names<N: ViewNotifier>(model: &ColorListModel<N>) -> Vec<String> {
    model
        .entries()
        .iter()
        .map(|entry| entry.name().to_string())
        .collect()
}

#[test]
fn test_sentinel_row_leads_every_sort_rule() {
    let table = hue_palette();

    for rule in [SortRule::ByName, SortRule::ByValue, SortRule::ByType] {
        let model = ColorListModel::new();
        model.set_sort_rule(rule);
        model.set_color_list_with_none(&table, true);

        assert_eq!(model.row_count(&ModelIndex::invalid()), table.len() + 1);
        assert!(model.entry(0).is_some_and(|entry| entry.is_none_color()));
    }
}

#[test]
fn test_sort_by_value_follows_hue() {
    let model = ColorListModel::with_notifier(RecordingNotifier::default());
    model.set_color_list(&hue_palette());
    assert_eq!(names(&model), vec!["A Orange", "B Azure", "C Chartreuse"]);

    model.set_sort_rule(SortRule::ByValue);
    assert_eq!(names(&model), vec!["A Orange", "C Chartreuse", "B Azure"]);
}

#[test]
fn test_sort_by_value_splits_neighbouring_hues() {
    let mut colors = ColorList::new();
    // 36.0 and 35.76 degrees.
    colors.insert("A", ColorDef::rgb(255, 153, 0));
    colors.insert("B", ColorDef::rgb(255, 152, 0));

    let model = ColorListModel::new();
    model.set_sort_rule(SortRule::ByValue);
    model.set_color_list(&colors);

    assert_eq!(names(&model), vec!["B", "A"]);
}

#[test]
fn test_bulk_operations_emit_single_reset() {
    let model = ColorListModel::with_notifier(RecordingNotifier::default());

    model.set_color_list_with_none(&hue_palette(), true);
    let reset = vec![Event::AboutToReset, Event::Mutated, Event::Reset];
    assert_eq!(model.notifier().take(), reset);

    model.set_sort_rule(SortRule::ByType);
    assert_eq!(model.notifier().take(), reset);

    model.set_show_none_color(false);
    assert_eq!(model.notifier().take(), reset);
    assert_eq!(model.len(), 3);

    model.clear();
    assert_eq!(model.notifier().take(), reset);
    assert!(model.is_empty());
}

#[test]
fn test_unchanged_settings_do_not_notify() {
    let model = ColorListModel::with_notifier(RecordingNotifier::default());
    model.set_color_list(&hue_palette());
    model.notifier().take();

    model.set_sort_rule(SortRule::ByName);
    model.set_show_none_color(false);

    assert!(model.notifier().take().is_empty());
    assert_eq!(model.sort_rule(), SortRule::ByName);
    assert!(!model.is_none_color_shown());
}

#[test]
fn test_insert_then_remove_restores_rows() {
    let model = ColorListModel::with_notifier(RecordingNotifier::default());
    model.set_color_list_with_none(&hue_palette(), true);
    model.notifier().take();
    let before = model.entries();

    let extra = slate();
    assert!(model.insert(2, extra.clone()));
    assert_eq!(model.len(), before.len() + 1);
    assert_eq!(model.entry(2), Some(extra));
    assert_eq!(
        model.notifier().take(),
        vec![Event::AboutToInsert(2, 2), Event::Mutated, Event::Inserted(2, 2)]
    );

    assert!(model.remove_row(2));
    assert_eq!(
        model.notifier().take(),
        vec![Event::AboutToRemove(2, 2), Event::Mutated, Event::Removed(2, 2)]
    );
    assert_eq!(model.entries(), before);
}

#[test]
fn test_rejected_row_operations_do_not_notify() {
    let model = ColorListModel::with_notifier(RecordingNotifier::default());
    model.set_color_list(&hue_palette());
    model.notifier().take();

    assert!(!model.insert(4, slate()));
    assert!(!model.remove_row(3));
    assert!(!model.remove_rows(1, 0));
    assert!(!model.remove_rows(1, 3));
    assert!(model.notifier().take().is_empty());

    assert!(model.remove_rows(1, 2));
    assert_eq!(
        model.notifier().take(),
        vec![Event::AboutToRemove(1, 2), Event::Mutated, Event::Removed(1, 2)]
    );
    assert_eq!(names(&model), vec!["A Orange"]);
}

#[test]
fn test_model_signals_reach_connected_views() {
    let model = ColorListModel::new();
    let log = Arc::new(Mutex::new(Vec::new()));

    let l1 = log.clone();
    model
        .signals()
        .rows_inserted
        .connect(move |(parent, first, last)| {
            l1.lock().push(format!("inserted {first}..={last} {}", parent.is_valid()));
        });
    let l2 = log.clone();
    model
        .signals()
        .rows_about_to_be_removed
        .connect(move |(_, first, last)| {
            l2.lock().push(format!("removing {first}..={last}"));
        });
    let l3 = log.clone();
    model
        .signals()
        .model_reset
        .connect(move |_| l3.lock().push("reset".to_string()));

    model.set_color_list(&hue_palette());
    model.insert(0, slate());
    model.remove_rows(2, 2);

    assert_eq!(
        *log.lock(),
        vec!["reset", "inserted 0..=0 false", "removing 2..=3"]
    );
    assert_eq!(model.len(), 2);
}

#[test]
fn test_projection_is_a_private_copy_of_document_colors() {
    let mut doc = Document::new(Unit::Points);
    doc.colors_mut().insert("Black", ColorDef::cmyk(0, 0, 0, 255));
    doc.colors_mut().insert("White", ColorDef::cmyk(0, 0, 0, 0));

    let model = ColorListModel::new();
    model.set_color_list(doc.colors());
    doc.colors_mut().remove("White");

    assert_eq!(model.len(), 2);
    let white = model.index(1, 0, &ModelIndex::invalid());
    assert_eq!(model.display_text(&white).as_deref(), Some("White"));
    assert_eq!(
        model.tooltip(&white).as_deref(),
        Some("C: 0% M: 0% Y: 0% K: 0%")
    );
    assert_eq!(
        model.entry(1).and_then(|entry| entry.document()),
        Some(doc.id())
    );
    assert!(model.data(&white, ItemRole::StatusTip).is_none());
}

#[test]
fn test_row_operations_never_touch_the_sentinel() {
    let model = ColorListModel::with_notifier(RecordingNotifier::default());
    model.set_color_list(&hue_palette());
    model.notifier().take();

    assert!(!model.insert(0, ColorEntry::none_color()));
    assert!(model.notifier().take().is_empty());
    assert!(model.entries().iter().all(|entry| !entry.is_none_color()));

    model.set_show_none_color(true);
    let sentinels = model.entries().iter().filter(|e| e.is_none_color()).count();
    assert_eq!(sentinels, 1);
    model.notifier().take();

    assert!(!model.remove_row(0));
    assert!(!model.remove_rows(0, 2));
    assert!(model.notifier().take().is_empty());
    assert!(model.is_none_color_shown());
    assert!(model.entry(0).is_some_and(|entry| entry.is_none_color()));

    assert!(model.remove_rows(1, 2));
    assert_eq!(model.len(), 2);
}

#[test]
fn test_clear_turns_the_sentinel_off() {
    let model = ColorListModel::new();
    model.set_color_list_with_none(&hue_palette(), true);

    model.clear();
    assert!(model.is_empty());
    assert!(!model.is_none_color_shown());

    model.set_show_none_color(true);
    assert_eq!(model.len(), 1);
    assert!(model.entry(0).is_some_and(|entry| entry.is_none_color()));
}
