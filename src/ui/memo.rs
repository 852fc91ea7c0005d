//! Render caching keyed by shallow prop equality.

/// Caches the last output of a render function together with the props it was
/// rendered from. The function only runs again when the props differ.
#[derive(Debug)]
pub struct Memo<P, O> {
    cached: Option<(P, O)>,
    renders: u64,
}

impl<P, O> Default for Memo<P, O> {
    fn default() -> Self {
        Self {
            cached: None,
            renders: 0,
        }
    }
}

impl<P: PartialEq, O> Memo<P, O> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, props: P, render: impl FnOnce(&P) -> O) -> &O {
        let entry = match self.cached.take() {
            Some((cached_props, output)) if cached_props == props => (cached_props, output),
            _ => {
                self.renders += 1;
                let output = render(&props);
                (props, output)
            }
        };
        &self.cached.insert(entry).1
    }

    pub fn renders(&self) -> u64 {
        self.renders
    }
}

/// How many times each component actually recomputed its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub app: u64,
    pub grid: u64,
    pub cells: u64,
    pub name_input: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_props_skip_render() {
        let mut memo: Memo<(u32, bool), String> = Memo::new();
        assert_eq!(memo.render((1, false), |p| format!("{:?}", p)), "(1, false)");
        assert_eq!(memo.render((1, false), |_| unreachable!()), "(1, false)");
        assert_eq!(memo.renders(), 1);
    }

    #[test]
    fn test_changed_props_rerender() {
        let mut memo: Memo<f64, u64> = Memo::new();
        memo.render(1.5, |v| v.floor() as u64);
        assert_eq!(*memo.render(2.5, |v| v.floor() as u64), 2);
        assert_eq!(*memo.render(1.5, |v| v.floor() as u64), 1);
        assert_eq!(memo.renders(), 3);
    }
}
