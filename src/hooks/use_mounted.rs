use yew::prelude::*;

use crate::models::MountState;

/// Tracks whether the calling component has completed its first client render.
///
/// Returns `Unmounted` during the first render pass and `Mounted` from the
/// render triggered by the mount effect onwards.
#[hook]
pub fn use_mounted() -> MountState {
    let state = use_state(MountState::default);

    {
        let state = state.clone();
        use_effect_with((), move |_| {
            state.set((*state).mount());
            || ()
        });
    }

    *state
}
