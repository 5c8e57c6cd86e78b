use leptos::prelude::*;

/// Reactive owner for signals created in a test; dropping it disposes them.
pub fn test_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}
