mod common;

use glyphpick::catalog::{StaticRegistry, SymbolLoader};
use glyphpick::cli::commands::pick::PickCommand;
use glyphpick::config::PickerConfig;
use glyphpick::picker::{InputRequest, SymbolsPicker, SymbolsPickerViewModel};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;
use tempfile::tempdir;

fn picker() -> SymbolsPicker {
    let names = ["globe", "house", "wifi", "wind", "car"];
    let loader = SymbolLoader::with_options(&StaticRegistry::new(names), &["globe"], 2);
    SymbolsPicker::new(SymbolsPickerViewModel::with_loader("Pick", "Search", loader))
}

#[test]
fn test_select_notifies_and_auto_dismisses() {
    common::init_test_logging();
    let selected = Rc::new(RefCell::new(Vec::new()));
    let dismissals = Rc::new(RefCell::new(0));

    let sink = Rc::clone(&selected);
    let counter = Rc::clone(&dismissals);
    let mut picker = picker()
        .on_select(move |name| sink.borrow_mut().push(name.to_string()))
        .on_dismiss(move || *counter.borrow_mut() += 1);

    picker.select("house");

    assert_eq!(picker.selection(), Some("house"));
    assert!(picker.is_selected("house"));
    assert_eq!(*selected.borrow(), vec!["house".to_string()]);
    assert_eq!(*dismissals.borrow(), 1);
}

#[test]
fn test_without_auto_dismiss_selection_keeps_picker_open() {
    let dismissals = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&dismissals);
    let mut picker = picker()
        .with_auto_dismiss(false)
        .with_selection("globe")
        .on_dismiss(move || *counter.borrow_mut() += 1);

    assert!(picker.is_selected("globe"));
    assert_eq!(picker.select_index(1), Some("house".to_string()));
    assert_eq!(*dismissals.borrow(), 0);

    assert_eq!(picker.select_index(10), None);
    assert_eq!(picker.selection(), Some("house"));

    picker.dismiss();
    assert_eq!(*dismissals.borrow(), 1);
}

#[test]
fn test_load_more_hidden_while_searching() {
    let mut picker = picker();
    assert!(picker.show_load_more());

    picker.edit_search(InputRequest::InsertChar('w'));
    assert_eq!(picker.symbols(), ["wifi", "wind"]);
    assert!(!picker.show_load_more());

    picker.clear_search();
    assert!(picker.show_load_more());
    picker.load_more();
    picker.load_more();
    assert_eq!(picker.symbols().len(), 5);
    assert!(!picker.show_load_more());
}

#[test]
fn test_line_session_selects_from_search() {
    let dir = tempdir().unwrap();
    let registry = common::write_registry(dir.path(), &["wifi", "house", "globe", "car", "wind"]);
    let config = PickerConfig {
        registry: Some(registry),
        page_size: 2,
        ..PickerConfig::default()
    };

    let input = Cursor::new("+\n/wi\n#2\n/never-reached\n");
    let mut output = Vec::new();
    let selection = PickCommand::new(config, None, false)
        .run_session(input, &mut output)
        .unwrap();

    assert_eq!(selection.as_deref(), Some("wind"));
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.starts_with("Pick a symbol\n"));
    assert!(transcript.contains("[/wi] 2 shown"));
    assert!(transcript.contains("selected wind"));
    assert!(!transcript.contains("never-reached"));
}

#[test]
fn test_line_session_quit_keeps_initial_selection() {
    let dir = tempdir().unwrap();
    let registry = common::write_registry(dir.path(), &["globe", "car"]);
    let config = PickerConfig {
        registry: Some(registry),
        ..PickerConfig::default()
    };

    let input = Cursor::new("#9\nbogus\nq\n");
    let mut output = Vec::new();
    let selection = PickCommand::new(config, Some("car".to_string()), false)
        .run_session(input, &mut output)
        .unwrap();

    assert_eq!(selection.as_deref(), Some("car"));
    let transcript = String::from_utf8(output).unwrap();
    assert!(transcript.contains("*   2 car"));
    assert!(transcript.contains("no glyph at #9"));
    assert!(transcript.contains("unknown command: bogus"));
}
