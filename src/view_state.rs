use derive_more::Display;

/// Lifecycle of the price chart view.
///
/// `Uninitialized -> Rendering` on init, `Rendering -> Idle` when a pass
/// settles, `Idle -> Rendering` on a change notification, anything ->
/// `Destroyed` on teardown. `Destroyed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ChartViewState {
    Uninitialized,
    Rendering,
    Idle,
    Destroyed,
}

impl ChartViewState {
    /// State after a render pass is kicked off
    pub fn on_render_started(self) -> Self {
        match self {
            Self::Destroyed => Self::Destroyed,
            _ => Self::Rendering,
        }
    }

    /// State after the newest pass settled, successfully or not
    pub fn on_render_settled(self) -> Self {
        match self {
            Self::Rendering => Self::Idle,
            other => other,
        }
    }

    pub fn is_destroyed(self) -> bool {
        self == Self::Destroyed
    }
}

/// What the view shows next to the chart
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ChartStatus {
    #[display(fmt = "Loading {}…", _0)]
    Loading(String),
    #[display(fmt = "{} points", points)]
    Ready { points: usize },
    #[display(fmt = "⚠️ {}", _0)]
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::ChartViewState::*;

    #[test]
    fn destroyed_is_terminal() {
        assert_eq!(Destroyed.on_render_started(), Destroyed);
        assert_eq!(Destroyed.on_render_settled(), Destroyed);
    }

    #[test]
    fn render_cycle() {
        let s = Uninitialized.on_render_started();
        assert_eq!(s, Rendering);
        assert_eq!(s.on_render_settled(), Idle);
        assert_eq!(Idle.on_render_started(), Rendering);
        assert_eq!(Idle.on_render_settled(), Idle);
    }
}
