//! End-to-end flows through the appearance controller, dispatcher and a
//! recording surface.

use listlayout::app::{BackgroundEffect, Dispatcher, SupplementaryMode};
use listlayout::domain::{Item, SectionId, SnapshotDiff};
use listlayout::ui::{RenderingSurface, TerminalSurface};
use listlayout::{handle_event, initialize, Config, Event, ListAppearance, ListConfiguration, Snapshot};

#[derive(Debug)]
enum Call {
    Reconfigure(ListConfiguration),
    Apply { sections: usize, items: usize, diff: SnapshotDiff },
}

#[derive(Debug, Default)]
struct RecordingSurface {
    calls: Vec<Call>,
    displayed: Snapshot,
}

impl RenderingSurface for RecordingSurface {
    fn reconfigure(&mut self, configuration: ListConfiguration) {
        self.calls.push(Call::Reconfigure(configuration));
    }

    fn apply_snapshot(&mut self, snapshot: Snapshot, _animated: bool) -> SnapshotDiff {
        let diff = SnapshotDiff::between(&self.displayed, &snapshot);
        self.calls.push(Call::Apply {
            sections: snapshot.number_of_sections(),
            items: snapshot.number_of_items(),
            diff: diff.clone(),
        });
        self.displayed = snapshot;
        diff
    }
}

fn run<S: RenderingSurface>(
    state: &mut listlayout::AppState,
    dispatcher: &mut Dispatcher,
    surface: &mut S,
    event: Event,
) -> bool {
    let (render, actions) = handle_event(state, &event);
    let host = dispatcher.submit(actions, surface);
    assert!(host.is_empty());
    dispatcher.drain(surface);
    render
}

#[test]
fn initialization_shows_plain_list_with_two_sections() {
    let mut state = initialize(&Config::default());
    let mut dispatcher = Dispatcher::new();
    let mut surface = RecordingSurface::default();

    assert!(run(&mut state, &mut dispatcher, &mut surface, Event::Initialize));

    assert_eq!(surface.calls.len(), 2);
    match &surface.calls[0] {
        Call::Reconfigure(configuration) => {
            assert_eq!(configuration.appearance, ListAppearance::Plain);
            assert_eq!(configuration.background, BackgroundEffect::Light);
            assert_eq!(configuration.header_mode, SupplementaryMode::Supplementary);
            assert_eq!(configuration.footer_mode, SupplementaryMode::Supplementary);
        }
        other => panic!("expected reconfigure first, got {other:?}"),
    }
    match &surface.calls[1] {
        Call::Apply { sections, items, diff } => {
            assert_eq!((*sections, *items), (2, 10));
            assert_eq!(diff.inserted_sections, vec![SectionId::Primary, SectionId::Secondary]);
        }
        other => panic!("expected apply second, got {other:?}"),
    }

    assert_eq!(
        surface.displayed.items(SectionId::Secondary).map(<[Item]>::len),
        Some(5)
    );
}

#[test]
fn selecting_sidebar_reconfigures_then_reapplies_identical_content() {
    let mut state = initialize(&Config::default());
    let mut dispatcher = Dispatcher::new();
    let mut surface = RecordingSurface::default();
    run(&mut state, &mut dispatcher, &mut surface, Event::Initialize);
    surface.calls.clear();

    assert!(run(&mut state, &mut dispatcher, &mut surface, Event::SelectAppearance(3)));

    assert_eq!(state.appearance, ListAppearance::Sidebar);
    assert_eq!(surface.calls.len(), 2);
    assert!(matches!(
        &surface.calls[0],
        Call::Reconfigure(c) if c.appearance == ListAppearance::Sidebar && c.background == BackgroundEffect::Alternate
    ));
    assert!(matches!(
        &surface.calls[1],
        Call::Apply { sections: 2, items: 10, diff } if diff.is_empty()
    ));
}

#[test]
fn every_segment_selects_its_appearance() {
    let mut state = initialize(&Config::default());
    let mut dispatcher = Dispatcher::new();
    let mut surface = RecordingSurface::default();

    for (index, expected) in ListAppearance::ALL.into_iter().enumerate() {
        surface.calls.clear();
        run(&mut state, &mut dispatcher, &mut surface, Event::SelectAppearance(index));

        assert_eq!(state.appearance, expected);
        let Call::Reconfigure(configuration) = &surface.calls[0] else {
            panic!("expected reconfigure, got {:?}", surface.calls[0]);
        };
        let expected_background = if expected == ListAppearance::Plain {
            BackgroundEffect::Light
        } else {
            BackgroundEffect::Alternate
        };
        assert_eq!(configuration.background, expected_background, "{expected}");
        assert!(matches!(&surface.calls[1], Call::Apply { sections: 2, items: 10, .. }));
    }
}

#[test]
fn stepping_wraps_in_both_directions() {
    let mut state = initialize(&Config::default());
    let mut dispatcher = Dispatcher::new();
    let mut surface = RecordingSurface::default();

    run(&mut state, &mut dispatcher, &mut surface, Event::PreviousAppearance);
    assert_eq!(state.appearance, ListAppearance::SidebarPlain);

    run(&mut state, &mut dispatcher, &mut surface, Event::NextAppearance);
    assert_eq!(state.appearance, ListAppearance::Plain);
}

#[test]
fn out_of_range_selection_leaves_surface_untouched() {
    let mut state = initialize(&Config::default());
    let mut dispatcher = Dispatcher::new();
    let mut surface = RecordingSurface::default();

    assert!(!run(&mut state, &mut dispatcher, &mut surface, Event::SelectAppearance(5)));
    assert!(surface.calls.is_empty());
    assert_eq!(state.appearance, ListAppearance::Plain);
}

#[test]
fn terminal_surface_lays_out_headers_by_position() {
    let mut state = initialize(&Config::default());
    let mut dispatcher = Dispatcher::new();
    let mut surface: TerminalSurface = TerminalSurface::default();

    run(&mut state, &mut dispatcher, &mut surface, Event::Initialize);
    run(&mut state, &mut dispatcher, &mut surface, Event::SelectAppearance(2));

    assert_eq!(surface.header(0).map(|h| h.text), Some("Section 0".to_string()));
    assert_eq!(surface.header(1).map(|h| h.text), Some("Section 1".to_string()));
    assert_eq!(surface.footer(1).map(|f| f.preferred_height), Some(0));
    assert!(surface.last_diff().is_empty());

    let vm = state.compute_viewmodel(&surface, 40);
    assert!(vm.empty_state.is_none());
    assert_eq!(vm.segments.iter().filter(|s| s.is_selected).count(), 1);
    assert_eq!(vm.segments[2].label, "INSETGROUPED");
}
