mod common;

use glyphpick::catalog::{StaticRegistry, SymbolLoader};
use glyphpick::picker::{InputRequest, SearchBinding, SymbolsPickerViewModel};
use pretty_assertions::assert_eq;

fn view_model() -> SymbolsPickerViewModel {
    let names = ["house", "wifi", "wind", "window", "car"];
    let loader = SymbolLoader::with_options(&StaticRegistry::new(names), &["car"], 2);
    SymbolsPickerViewModel::with_loader("Pick", "Search", loader)
}

#[test]
fn test_typing_searches_on_every_keystroke() {
    common::init_test_logging();
    let mut vm = view_model();
    let mut search = SearchBinding::new();

    assert!(search.handle(InputRequest::InsertChar('w'), &mut vm));
    assert_eq!(vm.symbols(), ["wifi", "wind", "window"]);

    assert!(search.handle(InputRequest::InsertChar('i'), &mut vm));
    assert!(search.handle(InputRequest::InsertChar('n'), &mut vm));
    assert_eq!(search.text(), "win");
    assert_eq!(vm.symbols(), ["wind", "window"]);

    // deleting a character widens the result again
    assert!(search.handle(InputRequest::DeletePrevChar, &mut vm));
    assert_eq!(vm.symbols(), ["wifi", "wind", "window"]);
}

#[test]
fn test_clearing_text_resets_to_first_page() {
    let mut vm = view_model();
    vm.load_symbols();
    assert_eq!(vm.symbols().len(), 4);

    let mut search = SearchBinding::new();
    search.handle(InputRequest::InsertChar('h'), &mut vm);
    assert_eq!(vm.symbols(), ["house"]);

    assert!(search.handle(InputRequest::DeletePrevChar, &mut vm));
    assert!(search.is_empty());
    assert_eq!(vm.symbols(), ["car", "house"]);
}

#[test]
fn test_cursor_moves_do_not_trigger_search() {
    let mut vm = view_model();
    let mut search = SearchBinding::new();
    search.set_text("wi", &mut vm);

    let before = vm.symbols().to_vec();
    assert!(!search.handle(InputRequest::GoToStart, &mut vm));
    assert_eq!(vm.symbols(), before.as_slice());
}

#[test]
fn test_set_text_and_clear() {
    let mut vm = view_model();
    let mut search = SearchBinding::new();

    assert!(search.set_text("WIN", &mut vm));
    assert_eq!(vm.symbols(), ["wind", "window"]);
    assert!(!search.set_text("WIN", &mut vm));

    assert!(search.clear(&mut vm));
    assert_eq!(vm.symbols(), ["car", "house"]);
    assert!(!search.clear(&mut vm));
}
