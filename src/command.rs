//! Per-pixel commands, the visitor that applies them, and the palette they're registered in.

use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};

use crate::node::Node;

/// A pure per-pixel transformation.
///
/// Commands must be total: defined for every representable value, never failing.  A command may
/// legitimately produce values outside the "meaningful" colour range (randomise does), and two
/// commands with identical behaviour are not required to compare equal — a command has no
/// identity beyond its behaviour and, at most, the [`CmdIdx`] it was registered under.
pub trait Command<T> {
    fn apply(&self, value: T) -> T;
}

/// Any `T -> T` closure is a command.
impl<T, F: Fn(T) -> T> Command<T> for F {
    fn apply(&self, value: T) -> T {
        self(value)
    }
}

/////////////
// VISITOR //
/////////////

/// Holds the currently active [`Command`] and applies it to one [`Node`] at a time.
///
/// Exactly one command is active at any time; [`Visitor::set_command`] replaces it atomically
/// (no blending or queueing).  A fresh `Visitor` holds the identity command, so visiting before
/// any selection leaves values untouched — there is no "no command yet" state to trip over.
pub struct Visitor<T> {
    command: Arc<dyn Command<T>>,
}

impl<T: Clone + 'static> Visitor<T> {
    pub fn new() -> Self {
        Self {
            command: Arc::new(|value: T| value),
        }
    }

    /// Replaces the active command.  Takes effect on the next visit; already-rendered output is
    /// unaffected.
    pub fn set_command(&mut self, command: Arc<dyn Command<T>>) {
        self.command = command;
    }

    /// Reads the node's current value, applies the active command and writes the result back
    /// into the same node.
    pub fn visit(&self, node: &mut Node<T>) {
        node.set(self.command.apply(node.get().clone()));
    }
}

impl<T: Clone + 'static> Default for Visitor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Visitor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Visitor(..)")
    }
}

/////////////
// PALETTE //
/////////////

index_vec::define_index_type! {
    /// Unique identifier for a command registered in a [`Palette`]
    pub struct CmdIdx = usize;
}
pub type CmdVec<T> = index_vec::IndexVec<CmdIdx, T>;

/// The set of named commands a controller can choose between at runtime.
pub struct Palette<T> {
    commands: CmdVec<NamedCommand<T>>,
}

struct NamedCommand<T> {
    name: String,
    command: Arc<dyn Command<T>>,
}

impl<T: 'static> Palette<T> {
    pub fn new() -> Self {
        Self {
            commands: CmdVec::new(),
        }
    }

    /// Registers a new command, returning the index it can be selected by.
    pub fn register(&mut self, name: impl Into<String>, command: impl Command<T> + 'static) -> CmdIdx {
        let name = name.into();
        log::debug!("registering command {:?}", name);
        self.commands.push(NamedCommand {
            name,
            command: Arc::new(command),
        })
    }

    /// Given a [`CmdIdx`], return the corresponding command (or `None` if nothing is registered
    /// under that index).
    pub fn get(&self, idx: CmdIdx) -> Option<&Arc<dyn Command<T>>> {
        self.commands.get(idx).map(|named| &named.command)
    }

    pub fn name(&self, idx: CmdIdx) -> Option<&str> {
        self.commands.get(idx).map(|named| named.name.as_str())
    }

    /// Looks a command up by its registered name.
    pub fn by_name(&self, name: &str) -> Option<&Arc<dyn Command<T>>> {
        self.commands
            .iter()
            .find(|named| named.name == name)
            .map(|named| &named.command)
    }

    pub fn names(&self) -> impl Iterator<Item = (CmdIdx, &str)> {
        self.commands
            .iter_enumerated()
            .map(|(idx, named)| (idx, named.name.as_str()))
    }
}

impl<T: 'static> Default for Palette<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Debug for Palette<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.commands.iter().map(|named| &named.name))
            .finish()
    }
}

/// The built-in pixel commands, operating on packed ARGB words.
pub mod built_ins {
    use super::{Command, Palette};
    use crate::argb;

    /// Bitwise complement of the whole pixel ("Negative").
    pub fn negative() -> impl Command<u32> {
        |pixel: u32| !pixel
    }

    /// Keeps only the red channel.  The other channels and the alpha byte are zeroed, which is
    /// the intended behaviour of these masks.
    pub fn red() -> impl Command<u32> {
        |pixel: u32| pixel & argb::RED_MASK
    }

    /// Keeps only the green channel.
    pub fn green() -> impl Command<u32> {
        |pixel: u32| pixel & argb::GREEN_MASK
    }

    /// Keeps only the blue channel.
    pub fn blue() -> impl Command<u32> {
        |pixel: u32| pixel & argb::BLUE_MASK
    }

    /// XORs every pixel with a fresh random word.  Any output value is acceptable here,
    /// including ones outside the meaningful colour range.
    pub fn randomise() -> impl Command<u32> {
        |pixel: u32| pixel ^ rand::random::<u32>()
    }

    /// The command a fresh [`Visitor`](super::Visitor) starts with.
    pub fn identity<T>() -> impl Command<T> {
        |value: T| value
    }

    /// A [`Palette`] pre-loaded with the five standard commands, under their toolbar labels.
    pub fn standard_palette() -> Palette<u32> {
        let mut palette = Palette::new();
        palette.register("Negative", negative());
        palette.register("Red", red());
        palette.register("Green", green());
        palette.register("Blue", blue());
        palette.register("Randomise", randomise());
        palette
    }
}
