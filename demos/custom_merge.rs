//! A custom merge strategy over plain (non-map) state.
//!
//! The store accepts any update type; here the state is a settings struct
//! and updates are commands, combined by an explicit strategy.

use mergestore::{Merged, Store, StoreBuilder};

#[derive(Clone, Debug, PartialEq)]
struct Settings {
    volume: u8,
    muted: bool,
}

enum Command {
    SetVolume(u8),
    ToggleMute,
}

fn apply(current: &Settings, command: &Command) -> Merged<Settings> {
    match command {
        Command::SetVolume(volume) if *volume == current.volume => Merged::Unchanged,
        Command::SetVolume(volume) => Merged::Changed(Settings {
            volume: *volume,
            ..current.clone()
        }),
        Command::ToggleMute => Merged::Changed(Settings {
            muted: !current.muted,
            ..current.clone()
        }),
    }
}

fn main() {
    println!("=== Custom merge ===\n");

    let store: Store<Settings, Command> = StoreBuilder::with_merge_fn(
        Settings {
            volume: 50,
            muted: false,
        },
        apply,
    )
    .on_change(|next: &Settings, prev: &Settings| {
        println!("settings: {prev:?} -> {next:?}");
    })
    .build();

    store.set_state(Command::SetVolume(80));
    store.set_state(Command::ToggleMute);

    println!("\nSetting the same volume again (no-op)...");
    store.set_state(Command::SetVolume(80));

    println!("\nFinal settings: {:?}", store.get_state());
}
