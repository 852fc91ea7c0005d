use crate::store::grid::GridAction;
use crate::store::name::NameAction;

/// Everything the UI can ask for. Each store only ever sees its own variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Grid(GridAction),
    Name(NameAction),
    /// Redraw the whole tree without touching either store.
    ForceRerender,
    Quit,
}
