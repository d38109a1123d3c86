/// Lifecycle of a single toggle instance.
///
/// Starts `Unmounted` and moves to `Mounted` once the first client render
/// has completed. `Mounted` is terminal.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MountState {
    #[default]
    Unmounted,
    Mounted,
}

impl MountState {
    pub const fn mount(self) -> Self {
        Self::Mounted
    }

    pub const fn is_mounted(self) -> bool {
        matches!(self, Self::Mounted)
    }
}
