//! Curated glyph names promoted to the front of the catalog

/// Glyph names shown before everything else, in this order.
///
/// Names missing from the registry are skipped. Repeated entries are
/// harmless: once a name has been moved, later lookups of it find nothing.
pub const PREFERRED_SYMBOLS: &[&str] = &[
    "globe",
    "globe.asia.australia",
    "globe.americas",
    "globe.europe.africa",
    "airport.express",
    "airport.extreme",
    "airport.extreme.tower",
    "wifi",
    "wifi.router",
    "wifi.circle",
    "wifi.square",
    "dot.radiowaves.left.and.right",
    "dot.radiowaves.left.and.right",
    "dot.radiowaves.left.and.right",
    "wave.3.backward",
    "wave.3.backward.circle",
    "house",
    "house.circle",
    "building.columns",
    "building",
    "building.2",
    "chart.bar",
    "cellularbars",
    "network",
    "personalhotspot",
    "icloud",
    "icloud.circle",
    "key.icloud",
    "bolt.horizontal",
    "externaldrive.badge.wifi",
    "tv.badge.wifi",
    "tv",
    "tv.circle",
    "play.tv",
    "appletv",
    "music.note.tv",
    "macstudio",
    "macmini",
    "macpro.gen2",
    "macpro.gen1",
    "macpro.gen3.server",
    "macbook.gen1",
    "macbook.gen2",
    "server.rack",
    "pc",
    "desktopcomputer",
    "play.desktopcomputer",
    "desktopcomputer.and.arrow.down",
    "laptopcomputer.and.arrow.down",
    "dot.scope.laptopcomputer",
    "laptopcomputer",
    "gamecontroller",
    "arcade.stick.console",
    "bolt.car",
    "car",
    "bonjour",
    "gauge.with.dots.needle.bottom.0percent",
    "gauge.with.dots.needle.bottom.50percent",
];

/// Move the named items to the front of `items`, in `order`.
///
/// Items found are placed at the front in the order they appear in `order`;
/// every other item keeps its relative position after them. Names not
/// present in `items` are skipped. Returns the number of items moved.
pub fn move_to_front<T, Q>(items: &mut Vec<T>, order: &[Q]) -> usize
where
    T: PartialEq<Q>,
{
    let mut dest = 0;
    for wanted in order {
        // Only the unplaced tail is searched, so a repeated name is not moved twice
        let found = items[dest..].iter().position(|item| item == wanted);
        if let Some(offset) = found {
            let item = items.remove(dest + offset);
            items.insert(dest, item);
            dest += 1;
        }
    }
    dest
}
